//! Page controllers: one load function per page, producing a [`FetchState`]
//! of display-ready records, plus the mutations some pages offer.
//!
//! Loads never fail outward. Hosts own the state, start a load whenever a
//! dependency changes, and publish the result only while its
//! [`LoadTicket`](crate::fetch::LoadTicket) is current.
//!
//! [`FetchState`]: crate::fetch::FetchState

pub mod connections;
pub mod dashboard;
pub mod institutions;
pub mod profiles;
pub mod user_detail;
pub mod users;

pub use connections::ConnectionView;
pub use dashboard::{ChartPoint, DashboardView, StatTile};
pub use institutions::InstitutionView;
pub use profiles::ProfileView;
pub use user_detail::{DetailSection, UserDetailView};
pub use users::UserView;

use thiserror::Error;

use crate::api::ApiError;
use crate::view::{self, ColorRole};

/// Filler for optional text fields with nothing on record.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Failure of a page mutation (add, create, delete).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// Rejected before any request was sent.
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    /// Text for a toast or a CLI warning.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(message) => message.clone(),
            Self::Api(err) => err.user_message(),
        }
    }
}

/// Avatar, name, and email of one person in a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCell {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub color: &'static str,
}

impl PersonCell {
    #[must_use]
    pub fn new(id: i64, name: String, email: String, role: ColorRole) -> Self {
        Self {
            initials: view::avatar_label(&name, &email),
            color: view::color_for(id, role),
            id,
            name,
            email,
        }
    }
}

fn or_not_specified(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(NOT_SPECIFIED)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_cell_derives_avatar() {
        let cell = PersonCell::new(
            5,
            "Elaina McAdams".to_string(),
            "e@x.edu".to_string(),
            ColorRole::Student,
        );
        assert_eq!(cell.initials, "EM");
        assert_eq!(cell.color, view::color_for(5, ColorRole::Student));

        let nameless = PersonCell::new(1, String::new(), "zed@x.edu".to_string(), ColorRole::Admin);
        assert_eq!(nameless.initials, "Z");
    }

    #[test]
    fn test_action_error_messages() {
        assert_eq!(
            ActionError::Invalid("name is required".into()).user_message(),
            "name is required"
        );
        let api = ActionError::from(ApiError::Http {
            status: 409,
            message: Some("Institution already exists".into()),
        });
        assert_eq!(api.user_message(), "Institution already exists");
    }

    #[test]
    fn test_or_not_specified() {
        assert_eq!(or_not_specified(None), NOT_SPECIFIED);
        assert_eq!(or_not_specified(Some("  ")), NOT_SPECIFIED);
        assert_eq!(or_not_specified(Some(" RN ")), "RN");
    }
}
