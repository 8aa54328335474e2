pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod nav;
pub mod page;
pub mod prefs;
pub mod reveal;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use page::{PageModel, RevealGroup, WatchedElement};
pub use prefs::{Preferences, ThemePreference};
