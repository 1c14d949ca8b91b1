use placard::{Controller, RequestSnapshot, RouteDescriptor};

pub struct AboutController;

impl Controller for AboutController {
    fn route(&self) -> RouteDescriptor {
        RouteDescriptor::new("/about", "about")
    }

    fn view(&self, _request: &RequestSnapshot) -> String {
        "<p>A small site rendered one page at a time.</p>\n\
         <p>Every page you can reach is listed in the header.</p>"
            .to_string()
    }
}
