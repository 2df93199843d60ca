// Consultation Form
// Free-consultation booking form with property details and requested service

use serde::Serialize;

use super::fields::{ChoiceField, TextField};
use super::list_property::take;
use super::validation;
use super::{PropertyInfo, BEDROOM_LABELS, PROPERTY_TYPES, SERVICES};

/// Validated payload handed to the submission sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultationData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub property_info: PropertyInfo,
    pub service: String,
}

/// Field state and focus for the consultation form
#[derive(Debug)]
pub struct ConsultationForm {
    pub first_name: TextField,
    pub last_name: TextField,
    pub email: TextField,
    pub mobile: TextField,
    pub property_type: ChoiceField,
    pub bedrooms: ChoiceField,
    pub service: ChoiceField,
    pub location: TextField,
    pub focus: usize,
}

impl ConsultationForm {
    pub const FIELD_COUNT: usize = 8;

    pub fn new() -> Self {
        Self {
            first_name: TextField::new("First Name*"),
            last_name: TextField::new("Last Name*"),
            email: TextField::new("Email*"),
            mobile: TextField::new("Mobile*"),
            property_type: ChoiceField::new("What is the type of property?*", &PROPERTY_TYPES),
            bedrooms: ChoiceField::new("Specify the number of bedrooms*", &BEDROOM_LABELS),
            service: ChoiceField::new("I am looking to*", &SERVICES),
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
        matches!(self.focus, 0..=3 | 7)
    }

    pub fn input(&mut self, c: char) {
        match self.focus {
            0 => self.first_name.push(c),
            1 => self.last_name.push(c),
            2 => self.email.push(c),
            3 => self.mobile.push(c),
            7 => self.location.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            0 => self.first_name.backspace(),
            1 => self.last_name.backspace(),
            2 => self.email.backspace(),
            3 => self.mobile.backspace(),
            7 => self.location.backspace(),
            _ => {}
        }
    }

    /// Cycle the focused choice field forward or backward
    pub fn cycle(&mut self, forward: bool) {
        let field = match self.focus {
            4 => &mut self.property_type,
            5 => &mut self.bedrooms,
            6 => &mut self.service,
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
    pub fn submit(&mut self) -> Option<ConsultationData> {
        let first_name = take(
            validation::require_min_len("FirstName", &self.first_name.value, 3),
            &mut self.first_name.error,
        );
        let last_name = take(
            validation::require_min_len("LastName", &self.last_name.value, 3),
            &mut self.last_name.error,
        );
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
        let service = take(
            validation::require_choice("Service", self.service.selection()),
            &mut self.service.error,
        );

        let (first_name, last_name, email, mobile, property_type, _, service) = (
            first_name?,
            last_name?,
            email?,
            mobile?,
            property_type?,
            bedrooms?,
            service?,
        );
        let number_of_bedrooms = self.bedrooms.selected.map(|i| i as u8 + 1)?;

        Some(ConsultationData {
            first_name,
            last_name,
            email,
            mobile,
            property_info: PropertyInfo {
                property_type,
                number_of_bedrooms,
                location: self.location.value.trim().to_string(),
            },
            service,
        })
    }

    /// Reset every field after a successful submission
    pub fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.mobile.clear();
        self.property_type.clear();
        self.bedrooms.clear();
        self.service.clear();
        self.location.clear();
        self.focus = 0;
    }
}

impl Default for ConsultationForm {
    fn default() -> Self {
        Self::new()
    }
}
