use tracing::info;

use crate::api::AdminClient;
use crate::fetch::FetchState;
use crate::models::{InstitutionFilter, InstitutionRecord, NewInstitution};
use crate::view::{self, ColorRole};

use super::{ActionError, or_not_specified};

/// One row of the institutions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionView {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub color: &'static str,
    pub kind: String,
    /// `City, State`, or whichever half is known.
    pub location: String,
    pub added: String,
}

impl From<&InstitutionRecord> for InstitutionView {
    fn from(record: &InstitutionRecord) -> Self {
        let location = [record.city.as_deref(), record.state.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: record.id,
            initials: view::initials(&record.name),
            color: view::color_for(record.id, ColorRole::Institution),
            name: record.name.clone(),
            kind: or_not_specified(record.kind.as_deref()),
            location: or_not_specified(Some(&location)),
            added: view::format_date(record.created_at.as_deref()),
        }
    }
}

/// Loads the institutions matching `filter`.
pub async fn load(
    client: &AdminClient,
    filter: &InstitutionFilter,
) -> FetchState<Vec<InstitutionView>> {
    let result = client
        .institutions(filter)
        .await
        .map(|records| records.iter().map(InstitutionView::from).collect());
    FetchState::settle(result, "Failed to load institutions", || None)
}

/// Validates and submits a new institution.
///
/// # Errors
/// [`ActionError::Invalid`] naming the first blank required field, or the
/// API failure.
pub async fn add(
    client: &AdminClient,
    institution: &NewInstitution,
) -> Result<InstitutionView, ActionError> {
    if let Some(field) = institution.missing_field() {
        return Err(ActionError::Invalid(format!("Institution {field} is required")));
    }
    let record = client.add_institution(institution).await?;
    info!(id = record.id, name = %record.name, "institution added");
    Ok(InstitutionView::from(&record))
}
