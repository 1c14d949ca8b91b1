//! Common test utilities shared across integration tests

use std::collections::HashMap;

use maplit::hashmap;
use placard::{
    Application, BoxedController, Controller, ControllerRegistry, RequestSnapshot,
    RouteDescriptor, Router,
};

pub struct IndexController;

impl Controller for IndexController {
    fn route(&self) -> RouteDescriptor {
        RouteDescriptor::new("/", "index")
    }

    fn view(&self, _request: &RequestSnapshot) -> String {
        "index view".to_string()
    }
}

pub struct TestController;

impl Controller for TestController {
    fn route(&self) -> RouteDescriptor {
        RouteDescriptor::new("/test", "test")
    }

    fn view(&self, _request: &RequestSnapshot) -> String {
        "test view".to_string()
    }
}

pub struct AboutController;

impl Controller for AboutController {
    fn route(&self) -> RouteDescriptor {
        RouteDescriptor::new("/about", "about")
    }

    fn view(&self, _request: &RequestSnapshot) -> String {
        "about view".to_string()
    }
}

/// Application registering all three controllers, in that order.
pub struct SiteApp;

impl Application for SiteApp {
    fn controllers(&self) -> Vec<BoxedController> {
        vec![
            Box::new(IndexController),
            Box::new(TestController),
            Box::new(AboutController),
        ]
    }

    fn page_title(&self) -> String {
        "Test site".to_string()
    }
}

pub fn build_router(application: &dyn Application) -> Router {
    let registry =
        ControllerRegistry::new(application.controllers()).expect("registry should build");
    Router::new(registry)
}

/// A snapshot whose dispatch path comes from `REQUEST_URI`, as it does under
/// a CGI host.
#[allow(dead_code)]
pub fn snapshot_for(path: &str) -> RequestSnapshot {
    RequestSnapshot::new(
        HashMap::new(),
        HashMap::new(),
        HashMap::new(),
        hashmap! { "REQUEST_URI".to_string() => path.to_string() },
    )
}
