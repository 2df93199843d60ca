// Text Utilities
// Word wrapping for fixed-height detail cards

/// Wrap `text` into lines of at most `width` characters, breaking on spaces.
/// Words longer than `width` are split hard.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split words that cannot fit on any line
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split: usize = word.char_indices().nth(width).map(|(i, _)| i).unwrap_or(word.len());
            lines.push(word[..split].to_string());
            word = &word[split..];
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_on_word_boundaries() {
        let lines = wrap_text("our dedicated team simplifies the process", 14);
        assert_eq!(lines, vec!["our dedicated", "team", "simplifies the", "process"]);
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_long_word_is_hard_split() {
        let lines = wrap_text("extraordinarily", 6);
        assert_eq!(lines, vec!["extrao", "rdinar", "ily"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("anything", 0).is_empty());
    }
}
