#![cfg_attr(not(test), forbid(unsafe_code))]

//! Framework-agnostic core of the CAUHEC Connect admin tools.
//!
//! Everything here is shared by the Yew web client and the command line:
//! the durable session, the REST client with its login fallback policy, the
//! authentication state machine, route guarding, and the per-page fetch
//! lifecycle with its display mappings.

pub mod api;
pub mod auth;
pub mod config;
pub mod fetch;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod view;

pub use api::{AdminClient, ApiError, ApiErrorKind, Auth, LoginRoute};
pub use auth::{AuthController, AuthState, LoginFailure};
pub use fetch::{FetchState, FetchStatus, LoadGeneration, LoadTicket};
pub use navigation::{GuardDecision, RouteGuard, View, redirect_for};
pub use session::{Session, SessionBackend, SessionError, SessionStore};
