pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod navigation;
pub mod settings;
pub mod ui;

pub use catalog::Catalog;
pub use error::{DataLoadError, NavigationError};
