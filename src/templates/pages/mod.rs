pub mod about;
pub mod error;
pub mod home;

pub use about::about_page;
pub use error::error_page;
pub use home::home_page;
