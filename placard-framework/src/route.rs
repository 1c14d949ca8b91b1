use serde::Serialize;

/// Routing metadata declared by a controller: the exact request path it
/// answers to and the symbolic name used for reverse routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
}

impl RouteDescriptor {
    pub const fn new(path: &'static str, name: &'static str) -> RouteDescriptor {
        RouteDescriptor { path, name }
    }
}
