use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::lenient;

/// Platform role a listed user belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Student,
    Preceptor,
}

impl UserRole {
    /// Value used for the `role` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Preceptor => "preceptor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" | "students" => Ok(Self::Student),
            "preceptor" | "preceptors" => Ok(Self::Preceptor),
            _ => Err("unknown user role"),
        }
    }
}

/// A student or preceptor as returned by `users-list` and `view-user`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
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
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub subscribe_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub experience: Option<String>,
    #[serde(default)]
    pub clinical_role: Option<String>,
    #[serde(default)]
    pub major_clinical_program_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub number_of_clinical_hours_needed: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub work_location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl UserRecord {
    /// `fullName` when the backend sends one, otherwise first and last joined.
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

    /// School for students, work location for preceptors.
    #[must_use]
    pub fn affiliation(&self) -> Option<&str> {
        fn present(value: &Option<String>) -> Option<&str> {
            value
                .as_deref()
                .filter(|value| !value.trim().is_empty())
        }
        present(&self.school_name).or_else(|| present(&self.work_location))
    }
}
