// Content Validation
// Sanity checks over loaded page content, with fallback to the compiled-in copy

use std::path::PathBuf;
use tracing::warn;

use crate::config::{load_content, ContentError, PageContent};

/// Check loaded content for values the views cannot render sensibly.
///
/// An empty process point list is deliberately NOT an error: the carousel
/// renders nothing for it.
pub fn validate_content(content: &PageContent) -> Result<(), ContentError> {
    if content.hero.heading.trim().is_empty() {
        return Err(ContentError::EmptyHeroHeading);
    }
    for (i, point) in content.why_us.points.iter().enumerate() {
        if point.title.trim().is_empty() {
            return Err(ContentError::EmptyCheckPoint(i));
        }
    }
    for (i, point) in content.process.points.iter().enumerate() {
        if point.title.trim().is_empty() || point.detail.title.trim().is_empty() {
            return Err(ContentError::EmptyPointTitle(i));
        }
    }
    for (i, stat) in content.consultation.stats.iter().enumerate() {
        if stat.value.trim().is_empty() || stat.label.trim().is_empty() {
            return Err(ContentError::EmptyStat(i));
        }
    }
    if !(10..=1000).contains(&content.ui.tick_ms) {
        return Err(ContentError::TickOutOfRange(content.ui.tick_ms));
    }
    Ok(())
}

/// Load and validate page content, falling back to the compiled-in copy when
/// the runtime file is missing or broken
pub fn load_and_validate_content(
    content_path: Option<PathBuf>,
) -> Result<PageContent, ContentError> {
    let content = match load_content(content_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to load content file: {e}; using built-in content");
            PageContent::built_in()?
        }
    };

    match validate_content(&content) {
        Ok(()) => Ok(content),
        Err(e) => {
            warn!("content failed validation: {e}; using built-in content");
            let fallback = PageContent::built_in()?;
            validate_content(&fallback)?;
            Ok(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_content_validates() {
        let content = PageContent::built_in().unwrap();
        assert!(validate_content(&content).is_ok());
        assert_eq!(content.process.points.len(), 4);
    }

    #[test]
    fn test_empty_hero_heading_rejected() {
        let mut content = PageContent::built_in().unwrap();
        content.hero.heading = "  ".to_string();
        assert!(matches!(
            validate_content(&content),
            Err(ContentError::EmptyHeroHeading)
        ));
    }

    #[test]
    fn test_tick_bounds_enforced() {
        let mut content = PageContent::built_in().unwrap();
        content.ui.tick_ms = 5;
        assert!(matches!(
            validate_content(&content),
            Err(ContentError::TickOutOfRange(5))
        ));
        content.ui.tick_ms = 50;
        assert!(validate_content(&content).is_ok());
    }

    #[test]
    fn test_empty_point_list_is_valid() {
        let mut content = PageContent::built_in().unwrap();
        content.process.points.clear();
        assert!(validate_content(&content).is_ok());
    }
}
