//! Pure mappings from backend values to display fields.
//!
//! Every page derives avatars, colors, and dates through these functions so
//! the same record renders the same way everywhere.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::UserRole;

/// Shown where a date is absent or unparseable.
pub const MISSING_DATE: &str = "N/A";

/// Avatar background classes. Each [`ColorRole`] owns a disjoint slice.
pub const PALETTE: [&str; 12] = [
    // students
    "bg-cauhec-red",
    "bg-orange-500",
    "bg-pink-500",
    "bg-rose-500",
    // preceptors
    "bg-purple-500",
    "bg-blue-500",
    "bg-green-500",
    "bg-teal-500",
    // administrators
    "bg-slate-600",
    "bg-gray-500",
    // institutions
    "bg-indigo-500",
    "bg-cyan-600",
];

/// Which slice of [`PALETTE`] an avatar draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Student,
    Preceptor,
    Admin,
    Institution,
}

impl ColorRole {
    /// `(start, len)` of this role's slice.
    #[must_use]
    pub const fn range(self) -> (usize, usize) {
        match self {
            Self::Student => (0, 4),
            Self::Preceptor => (4, 4),
            Self::Admin => (8, 2),
            Self::Institution => (10, 2),
        }
    }

    /// Maps a free-form backend role name; unknown roles use the admin slice.
    #[must_use]
    pub fn from_role_name(role: Option<&str>) -> Self {
        match role.map(|role| role.trim().to_ascii_lowercase()).as_deref() {
            Some("student") => Self::Student,
            Some("preceptor") => Self::Preceptor,
            _ => Self::Admin,
        }
    }
}

impl From<UserRole> for ColorRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Student => Self::Student,
            UserRole::Preceptor => Self::Preceptor,
        }
    }
}

/// First letter of each whitespace-separated token, uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Avatar letter(s) for an account that may only have an email.
#[must_use]
pub fn avatar_label(name: &str, email: &str) -> String {
    let from_name = initials(name);
    if !from_name.is_empty() {
        return from_name;
    }
    email
        .trim()
        .chars()
        .next()
        .map_or_else(|| "U".to_string(), |first| first.to_uppercase().collect())
}

/// Palette class for `id` within `role`'s slice.
#[must_use]
pub fn color_for(id: i64, role: ColorRole) -> &'static str {
    let (start, len) = role.range();
    let offset = id.rem_euclid(i64::try_from(len).unwrap_or(1));
    let offset = usize::try_from(offset).unwrap_or_default();
    PALETTE[start + offset]
}

/// Normalizes a backend timestamp to `DD/MM/YYYY`.
///
/// Accepts RFC 3339 (`2024-01-16T10:42:13.000Z`), naive date-times, bare
/// ISO dates, and values already in `DD/MM/YYYY`. The calendar date is taken
/// in the timestamp's own offset.
#[must_use]
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return MISSING_DATE.to_string();
    };
    parse_date(raw).map_or_else(
        || MISSING_DATE.to_string(),
        |date| date.format("%d/%m/%Y").to_string(),
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .into_iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
        .map(|stamp| stamp.date())
        .or_else(|| {
            ["%Y-%m-%d", "%d/%m/%Y"]
                .into_iter()
                .find_map(|pattern| NaiveDate::parse_from_str(raw, pattern).ok())
        })
}

/// Signed one-decimal percentage: `+12.5%`, `-3.0%`, `+0.0%`.
#[must_use]
pub fn format_change(change: Option<f64>) -> String {
    let value = change.filter(|value| value.is_finite()).unwrap_or_default();
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.abs() < 0.05 {
        "+0.0%".to_string()
    } else if rounded > 0.0 {
        format!("+{rounded:.1}%")
    } else {
        format!("{rounded:.1}%")
    }
}

/// Thousands-separated count for stat tiles (`12,480`).
#[must_use]
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
