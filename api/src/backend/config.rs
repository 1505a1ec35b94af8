use std::env;
use std::path::PathBuf;

use super::BackendError;

/// Connection settings for the backend, read from the environment.
///
/// # Environment Variables
/// - `FOODGIFT_BACKEND_URL`: base URL of the backend. Required.
/// - `FOODGIFT_ANON_KEY`: public API key sent with every request. Required.
/// - `FOODGIFT_ACCESS_TOKEN`: the signed-in user's access token.
/// - `FOODGIFT_SESSION_FILE`: file holding the access token. Only consulted
///   when `FOODGIFT_ACCESS_TOKEN` is unset, and re-read on every lookup so a
///   fresh sign-in is picked up without a restart.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
    session_file: Option<PathBuf>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            access_token: None,
            session_file: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    pub fn from_env() -> Result<Self, BackendError> {
        let base_url = non_empty_var("FOODGIFT_BACKEND_URL")
            .ok_or(BackendError::MissingConfig("FOODGIFT_BACKEND_URL"))?;
        let anon_key = non_empty_var("FOODGIFT_ANON_KEY")
            .ok_or(BackendError::MissingConfig("FOODGIFT_ANON_KEY"))?;

        let mut config = Self::new(base_url, anon_key);
        config.access_token = non_empty_var("FOODGIFT_ACCESS_TOKEN");
        config.session_file = non_empty_var("FOODGIFT_SESSION_FILE").map(PathBuf::from);
        Ok(config)
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolves the current access token, if any.
    ///
    /// An absent session file is the same as being signed out.
    pub async fn access_token(&self) -> Result<Option<String>, BackendError> {
        if let Some(token) = &self.access_token {
            return Ok(Some(token.clone()));
        }
        let Some(path) = &self.session_file else {
            return Ok(None);
        };
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(BackendError::SessionFile {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

// Keys and tokens stay out of logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("session_file", &self.session_file)
            .finish_non_exhaustive()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
