use std::collections::HashMap;

use kv_log_macro as log;

use crate::{BoxedController, ConfigurationError, Controller, RouteDescriptor};

/// The route registry: every registered controller plus the two lookup
/// indexes derived from their route declarations. Built once at startup and
/// never mutated afterwards, so it is safe to share read-only across threads.
pub struct ControllerRegistry {
    controllers: Vec<BoxedController>,
    routes: Vec<RouteDescriptor>,
    by_path: HashMap<&'static str, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl ControllerRegistry {
    /// Index an explicit registration list. Fails when a controller declares
    /// no usable route, or when two controllers share a name or a path —
    /// both signal a broken deployment, not bad input, so nothing may be
    /// served after either.
    pub fn new(
        controllers: Vec<BoxedController>,
    ) -> Result<ControllerRegistry, ConfigurationError> {
        let mut routes = Vec::with_capacity(controllers.len());
        let mut by_path = HashMap::with_capacity(controllers.len());
        let mut by_name = HashMap::with_capacity(controllers.len());

        for (position, controller) in controllers.iter().enumerate() {
            let route = controller.route();
            if route.path.is_empty() || route.name.is_empty() {
                return Err(ConfigurationError::MissingRoute { position });
            }
            if by_name.insert(route.name, position).is_some() {
                return Err(ConfigurationError::DuplicateName {
                    name: route.name.to_string(),
                });
            }
            if by_path.insert(route.path, position).is_some() {
                return Err(ConfigurationError::DuplicatePath {
                    path: route.path.to_string(),
                });
            }
            routes.push(route);
        }

        log::info!("Route registry built", { routes: routes.len() });

        Ok(ControllerRegistry {
            controllers,
            routes,
            by_path,
            by_name,
        })
    }

    pub(crate) fn by_path(&self, path: &str) -> Option<&dyn Controller> {
        self.by_path
            .get(path)
            .map(|&position| self.controllers[position].as_ref())
    }

    pub(crate) fn by_name(&self, name: &str) -> Option<&dyn Controller> {
        self.by_name
            .get(name)
            .map(|&position| self.controllers[position].as_ref())
    }

    /// Registered routes, in registration order.
    pub(crate) fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
