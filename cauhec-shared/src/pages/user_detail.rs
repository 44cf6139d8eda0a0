//! Profile page of a single student or preceptor.
//!
//! A failed load falls back to a placeholder record that carries the
//! requested id, so the page keeps its layout and the back link works.

use crate::api::AdminClient;
use crate::fetch::FetchState;
use crate::models::UserRecord;
use crate::view::{self, ColorRole};

use super::{PersonCell, or_not_specified};

/// A titled group of label/value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailView {
    pub person: PersonCell,
    pub role: String,
    pub joined: String,
    pub updated: String,
    pub sections: Vec<DetailSection>,
}

impl UserDetailView {
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        let role = ColorRole::from_role_name(record.role.as_deref());
        let field = |label, value: &Option<String>| (label, or_not_specified(value.as_deref()));
        let joined = view::format_date(record.created_at.as_deref());
        let updated = view::format_date(record.updated_at.as_deref());

        let sections = vec![
            DetailSection {
                title: "Professional Information",
                fields: vec![
                    field("Clinical role", &record.clinical_role),
                    field("Experience", &record.experience),
                    field("Program type", &record.major_clinical_program_type),
                    field("Clinical hours needed", &record.number_of_clinical_hours_needed),
                ],
            },
            DetailSection {
                title: "School Information",
                fields: vec![
                    ("School", or_not_specified(record.affiliation())),
                    field("State", &record.state),
                ],
            },
            DetailSection {
                title: "Status Information",
                fields: vec![
                    field("Subscription", &record.subscribe_status),
                    ("Joined", joined.clone()),
                    ("Last updated", updated.clone()),
                ],
            },
            DetailSection {
                title: "Additional Information",
                fields: vec![field("Bio", &record.bio)],
            },
        ];

        Self {
            person: PersonCell::new(record.id, record.display_name(), record.email.clone(), role),
            role: or_not_specified(record.role.as_deref()),
            joined,
            updated,
            sections,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.person.id
    }
}

/// Stand-in record for a user that could not be loaded.
#[must_use]
pub fn placeholder(id: &str) -> UserRecord {
    UserRecord {
        id: id.trim().parse().unwrap_or_default(),
        full_name: Some("Unknown user".to_string()),
        ..UserRecord::default()
    }
}

/// Loads the user with `id`.
pub async fn load(client: &AdminClient, id: &str) -> FetchState<UserDetailView> {
    let result = client
        .user(id)
        .await
        .map(|record| UserDetailView::from_record(&record));
    FetchState::settle(result, "Failed to load user details", || {
        Some(UserDetailView::from_record(&placeholder(id)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::NOT_SPECIFIED;

    #[test]
    fn test_detail_sections() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "id": "31",
            "fullName": "Elaina McAdams",
            "email": "elainamhall@mail.fresnostate.edu",
            "role": "Student",
            "majorClinicalProgramType": "Registered Nurse",
            "numberOfClinicalHoursNeeded": 120,
            "schoolName": "Loyola Marymount University - Baldwin Park",
            "state": "California",
            "createdAt": "2024-01-16T10:42:13.000Z",
            "updatedAt": "2024-03-02T00:00:00.000Z"
        }))
        .unwrap();

        let detail = UserDetailView::from_record(&record);
        assert_eq!(detail.id(), 31);
        assert_eq!(detail.person.initials, "EM");
        assert_eq!(detail.person.color, view::color_for(31, ColorRole::Student));
        assert_eq!(detail.joined, "16/01/2024");
        assert_eq!(detail.updated, "02/03/2024");
        let professional = &detail.sections[0];
        assert_eq!(professional.fields[0].1, NOT_SPECIFIED);
        assert_eq!(professional.fields[2].1, "Registered Nurse");
        assert_eq!(professional.fields[3].1, "120");
        assert_eq!(detail.sections[1].fields[1].1, "California");
    }

    #[test]
    fn test_placeholder_carries_requested_id() {
        let detail = UserDetailView::from_record(&placeholder("77"));
        assert_eq!(detail.id(), 77);
        assert_eq!(detail.person.name, "Unknown user");
        assert_eq!(detail.joined, view::MISSING_DATE);
        assert_eq!(placeholder("abc").id, 0);
    }
}
