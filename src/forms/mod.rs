// Lead Forms
// Client-side validated lead capture for the two page forms

pub mod consultation;
pub mod fields;
pub mod list_property;
pub mod submission;
pub mod validation;

use serde::Serialize;

pub use consultation::{ConsultationData, ConsultationForm};
pub use fields::{ChoiceField, TextField};
pub use list_property::{ListPropertyData, ListPropertyForm};
pub use submission::{to_payload, SubmissionLog, SubmissionSink};

/// Property types offered in both forms
pub const PROPERTY_TYPES: [&str; 6] = [
    "Apartment",
    "Villa",
    "Townhouse",
    "Penthouse",
    "Plot",
    "Commercial",
];

/// Bedroom options; the last renders as "5+" and submits as 6
pub const BEDROOM_LABELS: [&str; 6] = [
    "1 Bedroom",
    "2 Bedrooms",
    "3 Bedrooms",
    "4 Bedrooms",
    "5 Bedrooms",
    "5+ Bedrooms",
];

/// Services offered on the consultation form
pub const SERVICES: [&str; 3] = [
    "Rent out a property",
    "Sell a property",
    "Get a free property appraisal",
];

/// Property details shared by both form payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyInfo {
    pub property_type: String,
    pub number_of_bedrooms: u8,
    pub location: String,
}
