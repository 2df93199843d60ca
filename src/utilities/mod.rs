// Utilities
// Helper functions shared by the views

pub mod text;

pub use text::wrap_text;
