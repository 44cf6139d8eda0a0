use crate::api::AdminClient;
use crate::fetch::FetchState;
use crate::models::{ConnectionParty, ConnectionRecord};
use crate::view::{self, ColorRole};

use super::PersonCell;

/// One student/preceptor pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionView {
    pub id: i64,
    pub student: PersonCell,
    pub preceptor: PersonCell,
    pub status: Option<String>,
    pub requested: String,
    pub connected: String,
}

impl From<&ConnectionRecord> for ConnectionView {
    fn from(record: &ConnectionRecord) -> Self {
        Self {
            id: record.id,
            student: party_cell(&record.student, ColorRole::Student),
            preceptor: party_cell(&record.preceptor, ColorRole::Preceptor),
            status: record.status.clone(),
            requested: view::format_date(record.created_at.as_deref()),
            connected: view::format_date(record.connected_at.as_deref()),
        }
    }
}

fn party_cell(party: &ConnectionParty, role: ColorRole) -> PersonCell {
    PersonCell::new(party.id, party.display_name(), party.email.clone(), role)
}

pub async fn load(client: &AdminClient) -> FetchState<Vec<ConnectionView>> {
    let result = client
        .connections()
        .await
        .map(|records| records.iter().map(ConnectionView::from).collect());
    FetchState::settle(result, "Failed to load connections", || None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_uses_disjoint_palettes() {
        let record: ConnectionRecord = serde_json::from_value(serde_json::json!({
            "id": 9,
            "student": {"id": 4, "fullName": "Olivia Young", "email": "o@x.com"},
            "preceptor": {"id": 4, "fullName": "David Smith", "email": "d@x.com"},
            "requestDate": "2025-02-10T09:00:00.000Z"
        }))
        .unwrap();

        let row = ConnectionView::from(&record);
        assert_eq!(row.student.initials, "OY");
        assert_eq!(row.preceptor.initials, "DS");
        assert_ne!(row.student.color, row.preceptor.color);
        assert_eq!(row.requested, "10/02/2025");
        assert_eq!(row.connected, view::MISSING_DATE);
    }
}
