// Carousel Points
// Data model for the process steps shown in the point carousel

use serde::Deserialize;

/// A single step in the selling process.
///
/// The point list handed to the carousel is static for the carousel's
/// lifetime; nothing mutates it after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct Point {
    /// Label shown in the index strip
    pub title: String,
    /// Icon resource shown next to the label (opaque reference); a missing
    /// or broken reference degrades to an empty placeholder only
    #[serde(default)]
    pub icon: String,
    /// Content shown in the scrollable detail list
    pub detail: PointDetail,
}

/// Detail card content for one point
#[derive(Debug, Clone, Deserialize)]
pub struct PointDetail {
    /// Image resource for the detail card (opaque reference)
    #[serde(default)]
    pub image: String,
    pub title: String,
    pub description: String,
}
