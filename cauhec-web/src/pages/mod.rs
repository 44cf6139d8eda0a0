pub mod connections;
pub mod dashboard;
pub mod institutions;
pub mod login;
pub mod not_found;
pub mod profiles;
pub mod user_detail;
pub mod users;
