// Page Content
// Marketing copy and carousel points loaded from content.yaml

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::carousel::Point;
use crate::constants::DEFAULT_TICK_MS;

/// Everything that can go wrong loading or checking page content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("hero heading is empty")]
    EmptyHeroHeading,

    #[error("why-us point {0} has an empty title")]
    EmptyCheckPoint(usize),

    #[error("process point {0} has an empty title")]
    EmptyPointTitle(usize),

    #[error("stat {0} is missing a value or label")]
    EmptyStat(usize),

    #[error("tick interval {0}ms is out of range (10-1000)")]
    TickOutOfRange(u64),
}

/// Full page copy plus UI tuning
#[derive(Debug, Clone, Deserialize)]
pub struct PageContent {
    pub hero: HeroContent,
    pub why_us: WhyUsContent,
    pub process: ProcessContent,
    pub consultation: ConsultationContent,
    pub banner: BannerContent,
    pub footer: FooterContent,
    #[serde(default)]
    pub ui: UiContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroContent {
    pub brand: String,
    pub heading: String,
    pub tagline: String,
    pub card_title: String,
    pub card_subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhyUsContent {
    pub heading: String,
    pub blurb: String,
    pub points: Vec<CheckPoint>,
}

/// Bullet point in the why-us section
#[derive(Debug, Clone, Deserialize)]
pub struct CheckPoint {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessContent {
    pub heading: String,
    pub blurb: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsultationContent {
    pub heading: String,
    pub blurb: String,
    pub stats: Vec<Stat>,
    pub closing: String,
    pub form_title: String,
    pub form_subtitle: String,
}

/// Track-record figure ("16+" / "Years of Experience")
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerContent {
    pub heading: String,
    pub blurb: String,
    pub button: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterContent {
    pub made_by: String,
    pub copyright: String,
}

/// UI tuning knobs with sensible defaults
#[derive(Debug, Clone, Deserialize)]
pub struct UiContent {
    /// Disable to run the carousel without visibility observation
    #[serde(default = "default_true")]
    pub observer_enabled: bool,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiContent {
    fn default() -> Self {
        Self {
            observer_enabled: true,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

impl PageContent {
    /// Compiled-in copy of the shipped content.yaml, used when no content
    /// file can be loaded at runtime
    pub fn built_in() -> Result<Self, ContentError> {
        Ok(serde_yaml::from_str(include_str!("../content.yaml"))?)
    }
}

/// Load page content from the given path, or `content.yaml` beside the
/// manifest by default
pub fn load_content(content_path: Option<PathBuf>) -> Result<PageContent, ContentError> {
    let path = content_path.unwrap_or_else(|| {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("content.yaml");
        default_path
    });

    let contents = fs::read_to_string(&path)?;
    let content: PageContent = serde_yaml::from_str(&contents)?;
    Ok(content)
}
