use crate::{Controller, ControllerRegistry, NotFoundError, RouteDescriptor};

/// The query surface over a built registry. Lookups are exact string
/// matches; there is no normalization, partial matching, or parameter
/// extraction. The router itself has no side effects — callers decide how to
/// log and report misses.
pub struct Router {
    registry: ControllerRegistry,
}

impl Router {
    pub fn new(registry: ControllerRegistry) -> Router {
        Router { registry }
    }

    /// Dispatch lookup: the controller registered for exactly this path.
    pub fn resolve_by_path(&self, path: &str) -> Result<&dyn Controller, NotFoundError> {
        self.registry
            .by_path(path)
            .ok_or_else(|| NotFoundError::PathNotFound {
                path: path.to_string(),
            })
    }

    /// Reverse-routing lookup: the controller registered under a symbolic
    /// name. Never used for dispatch.
    pub fn resolve_by_name(&self, name: &str) -> Result<&dyn Controller, NotFoundError> {
        self.registry
            .by_name(name)
            .ok_or_else(|| NotFoundError::NameNotFound {
                name: name.to_string(),
            })
    }

    /// The route declared under a symbolic name, for building link targets
    /// without hardcoding paths.
    pub fn route_from_name(&self, name: &str) -> Result<RouteDescriptor, NotFoundError> {
        self.resolve_by_name(name)
            .map(|controller| controller.route())
    }

    /// Every registered route, in registration order.
    pub fn all_routes(&self) -> &[RouteDescriptor] {
        self.registry.routes()
    }
}
