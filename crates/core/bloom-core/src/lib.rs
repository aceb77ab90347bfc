pub mod config;
pub mod env;
pub mod error;
pub mod i18n;
pub mod models;
pub mod quotes;
pub mod relay;
pub mod seed;
pub mod store;

pub use config::ConfigManager;
pub use error::{AppError, AppResult};
pub use i18n::{Key, Language, Localizer};
pub use store::SessionStore;
