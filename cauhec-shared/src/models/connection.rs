use serde::{Deserialize, Serialize};

use super::lenient;

/// One side of a student/preceptor connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionParty {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl ConnectionParty {
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(full) = self
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|full| !full.is_empty())
        {
            return full.to_string();
        }
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A row of `GET /admin/all-connections`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: i64,
    #[serde(default)]
    pub student: ConnectionParty,
    #[serde(default)]
    pub preceptor: ConnectionParty,
    #[serde(default)]
    pub status: Option<String>,
    /// When the student requested the connection.
    #[serde(default, alias = "requestDate")]
    pub created_at: Option<String>,
    /// When the preceptor accepted it.
    #[serde(default, alias = "connectionDate", alias = "acceptedAt")]
    pub connected_at: Option<String>,
}
