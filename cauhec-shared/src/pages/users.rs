use crate::api::AdminClient;
use crate::fetch::FetchState;
use crate::models::{UserRecord, UserRole};
use crate::view::{self, ColorRole};

use super::{PersonCell, or_not_specified};

/// One row of the users table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub person: PersonCell,
    pub role: UserRole,
    /// School for students, work location for preceptors.
    pub school: String,
    pub joined: String,
}

impl UserView {
    #[must_use]
    pub fn from_record(record: &UserRecord, role: UserRole) -> Self {
        Self {
            person: PersonCell::new(
                record.id,
                record.display_name(),
                record.email.clone(),
                ColorRole::from(role),
            ),
            role,
            school: or_not_specified(record.affiliation()),
            joined: view::format_date(record.created_at.as_deref()),
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.person.id
    }
}

/// Loads the users of one role tab.
pub async fn load(client: &AdminClient, role: UserRole) -> FetchState<Vec<UserView>> {
    let result = client.users(role).await.map(|records| {
        records
            .iter()
            .map(|record| UserView::from_record(record, role))
            .collect()
    });
    FetchState::settle(result, &format!("Failed to load {role}s"), || None)
}
