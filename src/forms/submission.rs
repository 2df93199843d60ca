// Submission Handler
// Destination for validated lead payloads. The current behavior is a
// diagnostic log only; a production deployment would POST the same JSON body
// to a CRM endpoint instead.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Sink for validated form payloads
pub trait SubmissionSink {
    fn submit(&mut self, form: &str, payload: Value);
}

/// Logs each submission through tracing and counts them
#[derive(Debug, Default)]
pub struct SubmissionLog {
    count: usize,
}

impl SubmissionLog {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl SubmissionSink for SubmissionLog {
    fn submit(&mut self, form: &str, payload: Value) {
        self.count += 1;
        info!(target: "submission", form, %payload, "lead captured");
    }
}

/// Serialize a validated payload for submission
pub fn to_payload<T: Serialize>(data: &T) -> Value {
    serde_json::to_value(data).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ListPropertyData, PropertyInfo};

    #[test]
    fn test_log_sink_counts_submissions() {
        let mut sink = SubmissionLog::default();
        sink.submit("list_property", Value::Null);
        sink.submit("consultation", Value::Null);
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_payload_shape() {
        let data = ListPropertyData {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "+971501234567".to_string(),
            property_info: PropertyInfo {
                property_type: "Villa".to_string(),
                number_of_bedrooms: 3,
                location: "Palm Jumeirah".to_string(),
            },
        };
        let payload = to_payload(&data);
        assert_eq!(payload["name"], "Jane Smith");
        assert_eq!(payload["property_info"]["number_of_bedrooms"], 3);
    }
}
