use url::form_urlencoded;

/// One way of reaching the login endpoint.
///
/// The login call walks an ordered list of these. Deployments with a
/// correctly configured backend use a single `Direct` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRoute {
    /// `<base_url><path>`.
    Direct { base_url: String },
    /// `<prefix><url-encoded base_url + path>`, for relays that take the
    /// target as their query string.
    Relay { prefix: String, base_url: String },
}

impl LoginRoute {
    pub fn direct(base_url: impl Into<String>) -> Self {
        Self::Direct {
            base_url: base_url.into(),
        }
    }

    pub fn relay(prefix: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::Relay {
            prefix: prefix.into(),
            base_url: base_url.into(),
        }
    }

    /// Full URL for `path` through this route.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        match self {
            Self::Direct { base_url } => join_url(base_url, path),
            Self::Relay { prefix, base_url } => {
                let target = join_url(base_url, path);
                let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
                format!("{prefix}{encoded}")
            }
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct { .. } => "direct",
            Self::Relay { .. } => "relay",
        }
    }
}

/// Joins a base URL and a path with exactly one slash between them.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
