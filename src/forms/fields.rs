// Form Fields
// Focusable input widgets shared by both lead forms

/// Single-line text input with a validation error slot
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub label: String,
    pub value: String,
    pub error: Option<String>,
}

impl TextField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            error: None,
        }
    }

    /// Append a typed character; editing clears any stale error
    pub fn push(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.value.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

/// Pick-one field cycled with the arrow keys
#[derive(Debug, Clone)]
pub struct ChoiceField {
    pub label: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub error: Option<String>,
}

impl ChoiceField {
    pub fn new(label: &str, options: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            selected: None,
            error: None,
        }
    }

    pub fn cycle_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
        self.error = None;
    }

    pub fn cycle_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
        self.error = None;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing_clears_error() {
        let mut field = TextField::new("Name");
        field.error = Some("Name is required".to_string());
        field.push('a');
        assert_eq!(field.value, "a");
        assert!(field.error.is_none());
    }

    #[test]
    fn test_choice_field_cycles_both_directions() {
        let mut field = ChoiceField::new("Type", &["A", "B", "C"]);
        assert_eq!(field.selection(), None);
        field.cycle_next();
        assert_eq!(field.selection(), Some("A"));
        field.cycle_prev();
        assert_eq!(field.selection(), Some("C"));
        field.cycle_next();
        assert_eq!(field.selection(), Some("A"));
    }
}
