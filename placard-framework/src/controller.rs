use crate::{RequestSnapshot, RouteDescriptor};

pub type BoxedController = Box<dyn Controller>;

/// A controller answers exactly one route and produces the view fragment for
/// it. Controllers hold no request-scoped state; everything a view needs
/// arrives through the request snapshot.
pub trait Controller: Send + Sync {
    /// The route this controller is registered under. Read once, when the
    /// registry is built.
    fn route(&self) -> RouteDescriptor;

    /// Produce the rendered view content for a dispatched request.
    fn view(&self, request: &RequestSnapshot) -> String;
}
