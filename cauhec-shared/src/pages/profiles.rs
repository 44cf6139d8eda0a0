use tracing::info;

use crate::api::AdminClient;
use crate::fetch::FetchState;
use crate::models::{CreateAdminRequest, ProfileRecord};
use crate::view::{self, ColorRole};

use super::{ActionError, PersonCell};

const MIN_PASSWORD_LEN: usize = 8;

/// One administrator profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub person: PersonCell,
    pub role: String,
    pub created: String,
}

impl From<&ProfileRecord> for ProfileView {
    fn from(record: &ProfileRecord) -> Self {
        let name = [record.first_name.as_deref(), record.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            person: PersonCell::new(record.id, name, record.email.clone(), ColorRole::Admin),
            role: record
                .role
                .as_deref()
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .unwrap_or("admin")
                .to_string(),
            created: view::format_date(record.created_at.as_deref()),
        }
    }
}

impl ProfileView {
    #[must_use]
    pub fn id(&self) -> i64 {
        self.person.id
    }
}

pub async fn load(client: &AdminClient) -> FetchState<Vec<ProfileView>> {
    let result = client
        .profiles()
        .await
        .map(|records| records.iter().map(ProfileView::from).collect());
    FetchState::settle(result, "Failed to load profiles", || None)
}

/// Checks a create-admin form before it is sent.
///
/// # Errors
/// [`ActionError::Invalid`] describing the first problem.
pub fn validate_new_admin(request: &CreateAdminRequest) -> Result<(), ActionError> {
    let email = request.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ActionError::Invalid(
            "A valid email address is required".to_string(),
        ));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ActionError::Invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Creates an administrator account.
///
/// # Errors
/// A validation failure or the API failure.
pub async fn create(
    client: &AdminClient,
    request: &CreateAdminRequest,
) -> Result<ProfileView, ActionError> {
    validate_new_admin(request)?;
    let request = CreateAdminRequest {
        email: request.email.trim().to_string(),
        ..request.clone()
    };
    let record = client.create_admin(&request).await?;
    info!(id = record.id, "admin profile created");
    Ok(ProfileView::from(&record))
}

/// Deletes the profile with `id`.
///
/// # Errors
/// The API failure.
pub async fn delete(client: &AdminClient, id: i64) -> Result<(), ActionError> {
    client.delete_profile(id).await?;
    info!(id, "admin profile deleted");
    Ok(())
}
