// Core infrastructure module
// Application state and event handling

pub mod app;
pub mod events;

pub use app::{App, Section, StatusMessage};
pub use events::{AppEvent, EventHandler};
