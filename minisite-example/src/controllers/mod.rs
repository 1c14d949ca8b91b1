mod about;
mod contact;
mod home;

pub use about::AboutController;
pub use contact::ContactController;
pub use home::HomeController;
