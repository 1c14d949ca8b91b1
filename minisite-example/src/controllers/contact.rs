use placard::{Controller, RequestSnapshot, RouteDescriptor};

pub struct ContactController;

impl Controller for ContactController {
    fn route(&self) -> RouteDescriptor {
        RouteDescriptor::new("/contact", "contact")
    }

    fn view(&self, request: &RequestSnapshot) -> String {
        if let Some(message) = request.body().get("message") {
            log::info!("Contact message received ({} bytes)", message.len());
            return "<p>Thanks, your message was received.</p>".to_string();
        }

        "<form method=\"post\">\n\
         <label>Message <textarea name=\"message\"></textarea></label>\n\
         <button type=\"submit\">Send</button>\n\
         </form>"
            .to_string()
    }
}
