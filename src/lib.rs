// Estate Showcase Library
// Terminal rendition of the single-page brokerage site

// Core infrastructure - application state and events
pub mod core;

// The point carousel - index strip synchronized with a scrollable detail list
pub mod carousel;

// Lead-capture forms with local validation
pub mod forms;

// UI - views and the event loop
pub mod ui;

// Page content loading and validation
pub mod config;
pub mod config_validation;

// Structured logging setup
pub mod telemetry;

// Utilities - helper functions
pub mod utilities;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use carousel::{Carousel, Point, PollObserver, VisibilityObserver};
pub use config::PageContent;
pub use core::{App, AppEvent, EventHandler, Section};
