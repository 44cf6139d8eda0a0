pub mod auth;
pub mod connection;
pub mod dashboard;
pub mod institution;
pub mod lenient;
pub mod profile;
pub mod user;

pub use auth::{AdminUser, CreateAdminRequest, LoginRequest, LoginResponse};
pub use connection::{ConnectionParty, ConnectionRecord};
pub use dashboard::{ChartPayload, StatCounter, StatsPayload};
pub use institution::{InstitutionFilter, InstitutionRecord, NewInstitution};
pub use profile::ProfileRecord;
pub use user::{UserRecord, UserRole};
