pub mod contact;
pub mod navbar;
pub mod page;
pub mod status_bar;

pub use contact::ContactWidget;
pub use navbar::NavbarWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
