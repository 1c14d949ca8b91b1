mod application;
mod controller;
mod error;
mod page;
mod registry;
mod request;
mod route;
mod router;

use std::io::{self, Write};

use kv_log_macro as log;

pub use application::Application;
pub use controller::{BoxedController, Controller};
pub use error::{ConfigurationError, NotFoundError};
pub use page::PageRenderer;
pub use registry::ControllerRegistry;
pub use request::RequestSnapshot;
pub use route::RouteDescriptor;
pub use router::Router;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Serve one request from the CGI environment: capture the request snapshot,
/// build the registry, dispatch, and write the rendered document to stdout.
///
/// Configuration errors abort before anything is served. An unknown request
/// path renders the error page with a 404 status; an unknown route *name*
/// means the application builds links to a route that does not exist, and is
/// propagated as a fatal error instead.
pub fn run(application: impl Application) -> Result<()> {
    femme::start();

    let request = RequestSnapshot::from_env();
    let registry = ControllerRegistry::new(application.controllers())?;
    let router = Router::new(registry);
    let renderer = PageRenderer::new(&application, &router);

    log::info!("Dispatching request", { path: request.path() });

    let (status, document) = match renderer.render(&request) {
        Ok(document) => ("200 OK", document),
        Err(error @ NotFoundError::PathNotFound { .. }) => {
            log::error!("No route found", { path: request.path() });
            ("404 Not Found", renderer.not_found_page(&error, &request))
        }
        Err(error) => return Err(error.into()),
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    write!(
        stdout,
        "Status: {}\r\nContent-Type: text/html; charset=utf-8\r\n\r\n",
        status
    )?;
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
