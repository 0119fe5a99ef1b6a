//! Faculty — an organisational unit grouping laboratories and researchers.

use serde::{Deserialize, Serialize};

use crate::id::FacultyId;

/// A stored faculty row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    #[serde(rename = "facno")]
    pub id: FacultyId,
    #[serde(flatten)]
    pub fields: FacultyFields,
}

/// Every column of a faculty except its identifier. Also the create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyFields {
    #[serde(rename = "facnom")]
    pub name: Option<String>,
    #[serde(rename = "adresse")]
    pub address: Option<String>,
    #[serde(rename = "libelle")]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_missing_columns_to_none() {
        let fields: FacultyFields = serde_json::from_str(r#"{"facnom":"Sciences"}"#).unwrap();
        assert_eq!(fields.name.as_deref(), Some("Sciences"));
        assert!(fields.address.is_none());
        assert!(fields.label.is_none());
    }

    #[test]
    fn should_serialize_flat_row() {
        let faculty = Faculty {
            id: FacultyId::new(4),
            fields: FacultyFields {
                name: Some("Lettres".to_string()),
                address: Some("1 rue Haute".to_string()),
                label: None,
            },
        };
        let json = serde_json::to_value(&faculty).unwrap();
        assert_eq!(json["facno"], 4);
        assert_eq!(json["facnom"], "Lettres");
        assert!(json["libelle"].is_null());
    }
}
