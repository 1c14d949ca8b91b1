use crate::BoxedController;

pub trait Application: Send + Sync {
    /// Every controller the application serves. The registry consumes this
    /// list once at startup; its order is the navigation order.
    fn controllers(&self) -> Vec<BoxedController>;

    /// Title used for the document `<title>` and the page header.
    fn page_title(&self) -> String;

    /// Styles shipped with every page, before application styling.
    fn base_styles(&self) -> String {
        String::new()
    }

    /// Application styling, appended after the base styles.
    fn styles(&self) -> String {
        String::new()
    }
}
