use crate::{Application, NotFoundError, RequestSnapshot, Router};

/// Assembles the final page: dispatches the request through the router,
/// wraps the controller's view in the document chrome, and builds the header
/// navigation from every registered route.
pub struct PageRenderer<'a> {
    application: &'a dyn Application,
    router: &'a Router,
}

impl<'a> PageRenderer<'a> {
    pub fn new(application: &'a dyn Application, router: &'a Router) -> PageRenderer<'a> {
        PageRenderer {
            application,
            router,
        }
    }

    /// Dispatch the request and render the full document around the matched
    /// controller's view.
    pub fn render(&self, request: &RequestSnapshot) -> Result<String, NotFoundError> {
        let controller = self.router.resolve_by_path(request.path())?;
        let view = controller.view(request);
        let links = self.navigation()?;
        Ok(self.document(&view, &links))
    }

    /// Link target for a route name. Pages link by name so that paths are
    /// never hardcoded outside the route declarations.
    pub fn href_for(&self, name: &str) -> Result<String, NotFoundError> {
        self.router
            .route_from_name(name)
            .map(|route| route.path.to_string())
    }

    /// The page rendered when dispatch fails: the error message and a dump
    /// of the request snapshot.
    pub fn not_found_page(&self, error: &NotFoundError, request: &RequestSnapshot) -> String {
        let dump = serde_json::to_string_pretty(request).unwrap_or_default();
        format!("<h1>{}</h1>\n<pre>{}</pre>\n", error, dump)
    }

    fn navigation(&self) -> Result<String, NotFoundError> {
        let mut links = String::new();
        for route in self.router.all_routes() {
            let href = self.href_for(route.name)?;
            links.push_str(&format!(
                "<a href=\"{}\">{}</a>\n",
                href,
                link_label(route.name)
            ));
        }
        Ok(links)
    }

    fn document(&self, view: &str, links: &str) -> String {
        let title = self.application.page_title();
        let base_styles = self.application.base_styles();
        let styles = self.application.styles();

        format!(
            r#"<!DOCTYPE html>
<html>

<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <meta name="author" content="">
    <meta name="description" content="">
    <meta name="viewport" content="width=device-width, initial-scale=1">
</head>

<body>
<header class="header">
    <h1>{title}</h1>
    <div class="header__links">
{links}    </div>
</header>
<div class="body">{view}</div>
<footer>
</footer>
</body>

<!-- Base styles -->
{base_styles}

<!-- App styling -->
{styles}

</html>
"#
        )
    }
}

fn link_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
