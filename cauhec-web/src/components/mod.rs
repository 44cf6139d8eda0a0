pub mod avatar;
pub mod chart;
pub mod error_banner;
pub mod loading;
pub mod stat_card;
pub mod toaster;
