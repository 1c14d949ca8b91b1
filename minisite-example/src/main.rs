mod controllers;
mod stylesheet;

use placard::{Application, BoxedController, Result};

fn main() -> Result<()> {
    placard::run(MinisiteApplication)
}

#[derive(Copy, Clone)]
struct MinisiteApplication;

impl Application for MinisiteApplication {
    fn controllers(&self) -> Vec<BoxedController> {
        vec![
            Box::new(controllers::HomeController),
            Box::new(controllers::AboutController),
            Box::new(controllers::ContactController),
        ]
    }

    fn page_title(&self) -> String {
        "Minisite".to_string()
    }

    fn styles(&self) -> String {
        stylesheet::styles()
    }
}
