use placard::{Controller, RequestSnapshot, RouteDescriptor};

pub struct HomeController;

impl Controller for HomeController {
    fn route(&self) -> RouteDescriptor {
        RouteDescriptor::new("/", "index")
    }

    fn view(&self, request: &RequestSnapshot) -> String {
        match request.cookies().get("visitor") {
            Some(visitor) => format!("<p>Welcome back, {}.</p>", visitor),
            None => "<p>Welcome to the minisite.</p>".to_string(),
        }
    }
}
