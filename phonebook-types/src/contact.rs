use serde::{Deserialize, Serialize};

/// A phonebook entry as stored by the remote store. The id is assigned by
/// the store on creation and is treated as opaque by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

/// Request body for creating or replacing a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_round_trips_wire_format() {
        let json = r#"{"id":"7","name":"Ada Lovelace","number":"040-123456"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();

        assert_eq!(contact.id, "7");
        assert_eq!(contact.name, "Ada Lovelace");
        assert_eq!(contact.number, "040-123456");
        assert_eq!(serde_json::to_string(&contact).unwrap(), json);
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = ContactDraft {
            name: "Grace".to_string(),
            number: "555-0100".to_string(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Grace");
        assert_eq!(value["number"], "555-0100");
    }
}
