pub mod app;
pub mod components;
pub mod events;
pub mod routes;
pub mod theme;
pub mod update;
pub mod view;

pub use app::{ActiveInput, AppState};
pub use events::{AppEvent, EventHandler};
pub use routes::Route;
