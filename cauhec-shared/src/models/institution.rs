use serde::{Deserialize, Serialize};

use super::lenient;

/// A school location or clinical site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: i64,
    #[serde(default, alias = "schoolName")]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Query for `GET /admin/institutions`. Empty fields are sent as empty
/// parameters, which the backend treats as "any".
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct InstitutionFilter {
    pub state: String,
    pub kind: String,
    pub search: String,
}

impl InstitutionFilter {
    /// Query pairs in the order the backend documents them.
    #[must_use]
    pub fn query(&self) -> [(&'static str, &str); 3] {
        [
            ("state", self.state.trim()),
            ("type", self.kind.trim()),
            ("search", self.search.trim()),
        ]
    }
}

/// Request body for `POST /admin/add-institution`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewInstitution {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub state: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl NewInstitution {
    /// Returns the first missing required field, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("type", &self.kind),
            ("state", &self.state),
            ("city", &self.city),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_trims_values() {
        let filter = InstitutionFilter {
            state: " CA ".to_string(),
            kind: String::new(),
            search: "fresno".to_string(),
        };
        assert_eq!(
            filter.query(),
            [("state", "CA"), ("type", ""), ("search", "fresno")]
        );
    }

    #[test]
    fn test_institution_type_field_is_renamed() {
        let record: InstitutionRecord = serde_json::from_str(
            r#"{"id":5,"schoolName":"Georgia State University","type":"schoolLocations","state":"GA"}"#,
        )
        .unwrap();
        assert_eq!(record.name, "Georgia State University");
        assert_eq!(record.kind.as_deref(), Some("schoolLocations"));

        let body = serde_json::to_value(NewInstitution {
            name: "A".into(),
            kind: "clinicalSites".into(),
            state: "CA".into(),
            city: "Fresno".into(),
            address: None,
        })
        .unwrap();
        assert_eq!(body["type"], "clinicalSites");
        assert!(body.get("address").is_none());
    }

    #[test]
    fn test_missing_field_reports_first_blank() {
        let mut institution = NewInstitution {
            name: "Alabama A & M University".into(),
            kind: "schoolLocations".into(),
            state: String::new(),
            city: " ".into(),
            address: None,
        };
        assert_eq!(institution.missing_field(), Some("state"));
        institution.state = "AL".into();
        assert_eq!(institution.missing_field(), Some("city"));
        institution.city = "Huntsville".into();
        assert_eq!(institution.missing_field(), None);
    }
}
