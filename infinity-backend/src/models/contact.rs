use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted contact form entry, as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Raw contact form body. Fields are optional so a missing field is reported
/// as a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A validated submission, ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

impl ContactSubmission {
    /// Returns `None` if any field is absent or blank. Values are kept as sent.
    pub fn validate(self) -> Option<NewContact> {
        Some(NewContact {
            name: present(self.name)?,
            email: present(self.email)?,
            message: present(self.message)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name: name.map(String::from),
            email: email.map(String::from),
            message: message.map(String::from),
        }
    }

    #[test]
    fn test_validate_accepts_complete_submission() {
        let contact = submission(Some("Ada"), Some("ada@example.com"), Some(" hi "))
            .validate()
            .unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email, "ada@example.com");
        // Stored verbatim, only the emptiness check trims
        assert_eq!(contact.message, " hi ");
    }

    #[test]
    fn test_validate_rejects_missing_or_blank_fields() {
        assert!(submission(None, Some("a@b.c"), Some("hi")).validate().is_none());
        assert!(submission(Some("Ada"), None, Some("hi")).validate().is_none());
        assert!(submission(Some("Ada"), Some("a@b.c"), None).validate().is_none());
        assert!(submission(Some(""), Some("a@b.c"), Some("hi")).validate().is_none());
        assert!(submission(Some("Ada"), Some("   "), Some("hi")).validate().is_none());
        assert!(ContactSubmission::default().validate().is_none());
    }

    #[test]
    fn test_created_at_serializes_as_rfc3339() {
        let msg = ContactMessage {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "hi".to_string(),
            created_at: DateTime::parse_from_rfc3339("2024-05-01T10:20:30Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["created_at"], "2024-05-01T10:20:30Z");
    }
}
