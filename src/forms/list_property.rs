// List Property Form
// Hero-card lead form: schedule a call with a property consultant

use serde::Serialize;

use super::fields::{ChoiceField, TextField};
use super::validation;
use super::{PropertyInfo, BEDROOM_LABELS, PROPERTY_TYPES};

/// Validated payload handed to the submission sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPropertyData {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub property_info: PropertyInfo,
}

/// Field state and focus for the list-property form
#[derive(Debug)]
pub struct ListPropertyForm {
    pub name: TextField,
    pub email: TextField,
    pub mobile: TextField,
    pub property_type: ChoiceField,
    pub bedrooms: ChoiceField,
    pub location: TextField,
    pub focus: usize,
}

impl ListPropertyForm {
    pub const FIELD_COUNT: usize = 6;

    pub fn new() -> Self {
        Self {
            name: TextField::new("Your Full name*"),
            email: TextField::new("Your Email*"),
            mobile: TextField::new("Mobile*"),
            property_type: ChoiceField::new("Property type*", &PROPERTY_TYPES),
            bedrooms: ChoiceField::new("Bedrooms*", &BEDROOM_LABELS),
            location: TextField::new("Location"),
            focus: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// True when typing should go into the focused field
    pub fn text_focused(&self) -> bool {
        matches!(self.focus, 0 | 1 | 2 | 5)
    }

    pub fn input(&mut self, c: char) {
        match self.focus {
            0 => self.name.push(c),
            1 => self.email.push(c),
            2 => self.mobile.push(c),
            5 => self.location.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            0 => self.name.backspace(),
            1 => self.email.backspace(),
            2 => self.mobile.backspace(),
            5 => self.location.backspace(),
            _ => {}
        }
    }

    /// Cycle the focused choice field forward or backward
    pub fn cycle(&mut self, forward: bool) {
        let field = match self.focus {
            3 => &mut self.property_type,
            4 => &mut self.bedrooms,
            _ => return,
        };
        if forward {
            field.cycle_next();
        } else {
            field.cycle_prev();
        }
    }

    /// Validate every field. On success returns the submission payload;
    /// otherwise records per-field errors and returns None.
    pub fn submit(&mut self) -> Option<ListPropertyData> {
        let name = take(validation::require_min_len("Name", &self.name.value, 3), &mut self.name.error);
        let email = take(validation::require_email(&self.email.value), &mut self.email.error);
        let mobile = take(validation::require_mobile(&self.mobile.value), &mut self.mobile.error);
        let property_type = take(
            validation::require_choice("Property type", self.property_type.selection()),
            &mut self.property_type.error,
        );
        let bedrooms = take(
            validation::require_choice("Bedrooms", self.bedrooms.selection()),
            &mut self.bedrooms.error,
        );

        let (name, email, mobile, property_type, _) =
            (name?, email?, mobile?, property_type?, bedrooms?);
        let number_of_bedrooms = self.bedrooms.selected.map(|i| i as u8 + 1)?;

        Some(ListPropertyData {
            name,
            email,
            mobile,
            property_info: PropertyInfo {
                property_type,
                number_of_bedrooms,
                location: self.location.value.trim().to_string(),
            },
        })
    }

    /// Reset every field after a successful submission
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.mobile.clear();
        self.property_type.clear();
        self.bedrooms.clear();
        self.location.clear();
        self.focus = 0;
    }
}

impl Default for ListPropertyForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Record a validation error on the field and pass the value through
pub(super) fn take(result: Result<String, String>, error: &mut Option<String>) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            *error = Some(message);
            None
        }
    }
}
