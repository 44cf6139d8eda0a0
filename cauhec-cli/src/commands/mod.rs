pub mod admin;
pub mod completion;
pub mod config;
pub mod output;
pub mod records;
pub mod session;

use std::path::PathBuf;

use anyhow::{Result, bail};
use shared::config::ClientConfig;
use shared::session::FileBackend;
use shared::{AdminClient, FetchState, GuardDecision, RouteGuard, SessionStore, View};
use tracing::warn;

/// Overrides the session directory, mostly for scripted use.
pub const SESSION_DIR_ENV: &str = "CAUHEC_SESSION_DIR";

const LOGIN_HINT: &str = "not signed in; run `cauhec login` first";
const EXPIRED_HINT: &str = "session expired; run `cauhec login` to sign in again";

/// The file-backed session and a client that reads its token.
#[derive(Debug)]
pub struct Session {
    store: SessionStore,
    client: AdminClient,
    dir: PathBuf,
}

impl Session {
    pub fn open(config: &ClientConfig) -> Self {
        let dir = std::env::var_os(SESSION_DIR_ENV)
            .map_or_else(FileBackend::default_dir, PathBuf::from);
        let store = SessionStore::new(FileBackend::new(dir.clone()));
        let client = AdminClient::from_config(config, store.clone())
            .with_unauthorized_hook(|| warn!("the API rejected the stored token"));
        Self { store, client, dir }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// The client, if the stored session may enter `view`.
    pub fn require(&self, view: &View) -> Result<&AdminClient> {
        match RouteGuard::new(self.store.clone()).check(view) {
            GuardDecision::Enter => Ok(&self.client),
            GuardDecision::Redirect(_) => bail!(LOGIN_HINT),
        }
    }

    /// Prints a failed load as a warning and hands back whatever data there
    /// is. A load that ended the session is a command failure.
    pub fn settle<T>(&self, state: FetchState<T>) -> Result<Option<T>> {
        match state {
            FetchState::Loading => Ok(None),
            FetchState::Ready(data) => Ok(Some(data)),
            FetchState::Error { message, fallback } => {
                eprintln!("warning: {message}");
                if self.store.token().is_none() {
                    bail!(EXPIRED_HINT);
                }
                if fallback.is_some() {
                    eprintln!("warning: showing placeholder data");
                }
                Ok(fallback)
            }
        }
    }

    /// Turns a failed mutation into a command failure, noting an ended
    /// session.
    pub fn ensure_signed_in(&self) -> Result<()> {
        if self.store.token().is_none() {
            bail!(EXPIRED_HINT);
        }
        Ok(())
    }
}
