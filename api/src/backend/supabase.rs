//! A Supabase-compatible backend: GoTrue for sessions, PostgREST for rows.

use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;

use super::BackendConfig;
use super::BackendError;
use super::SessionProvider;
use super::TransactionStore;
use crate::session::Session;
use crate::session::UserId;
use crate::transaction::Transaction;
use crate::transaction::STATUS_COMPLETED;

const USER_PATH: &str = "auth/v1/user";
const TRANSACTIONS_PATH: &str = "rest/v1/transactions";

/// The user object returned by the auth endpoint. Other fields are ignored.
#[derive(Deserialize, Debug)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Builds the PostgREST query for a recipient's completed transactions.
pub fn completed_transactions_query(recipient: &UserId) -> Vec<(&'static str, String)> {
    vec![
        ("select", "*,food_items(name)".to_string()),
        ("recipient_id", format!("eq.{}", recipient)),
        ("status", format!("eq.{}", STATUS_COMPLETED)),
        ("order", "created_at.desc".to_string()),
    ]
}

/// Maps the auth endpoint's answer onto a session.
///
/// Rejected credentials mean nobody is signed in; any other failure status is
/// an error.
fn session_from_user_response(status: StatusCode, body: &str) -> Result<Option<Session>, BackendError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(BackendError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    let user: AuthUser = serde_json::from_str(body)?;
    Ok(Some(Session {
        user_id: UserId::new(user.id),
        email: user.email,
    }))
}

pub struct SupabaseBackend {
    config: BackendConfig,
    http_client: reqwest::Client,
}

impl SupabaseBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Headers for a request on behalf of `bearer`. Without a user token the
    /// anon key doubles as the bearer, as the backend expects.
    fn headers(&self, bearer: Option<&str>) -> Result<HeaderMap, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(self.config.anon_key())?);
        let bearer = bearer.unwrap_or(self.config.anon_key());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", bearer))?,
        );
        Ok(headers)
    }
}

impl SessionProvider for SupabaseBackend {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        let Some(token) = self.config.access_token().await? else {
            return Ok(None);
        };

        let resp = self
            .http_client
            .get(self.config.endpoint(USER_PATH))
            .headers(self.headers(Some(&token))?)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;

        session_from_user_response(status, &body)
    }
}

impl TransactionStore for SupabaseBackend {
    async fn completed_transactions(
        &self,
        recipient: &UserId,
    ) -> Result<Vec<Transaction>, BackendError> {
        let token = self.config.access_token().await?;

        let resp = self
            .http_client
            .get(self.config.endpoint(TRANSACTIONS_PATH))
            .headers(self.headers(token.as_deref())?)
            .query(&completed_transactions_query(recipient))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        // PostgREST answers `null` rather than `[]` in some proxy setups.
        let rows: Option<Vec<Transaction>> = resp.json().await?;
        Ok(rows.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_filters_recipient_and_status_newest_first() {
        let query = completed_transactions_query(&UserId::new("user-42"));
        assert_eq!(
            query,
            vec![
                ("select", "*,food_items(name)".to_string()),
                ("recipient_id", "eq.user-42".to_string()),
                ("status", "eq.completed".to_string()),
                ("order", "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn unauthorized_means_no_session() {
        assert_eq!(
            session_from_user_response(StatusCode::UNAUTHORIZED, "{\"msg\":\"expired\"}").unwrap(),
            None
        );
        assert_eq!(session_from_user_response(StatusCode::FORBIDDEN, "").unwrap(), None);
    }

    #[test]
    fn user_payload_becomes_session() {
        let body = r#"{"id":"abc-123","aud":"authenticated","email":"chef@example.com"}"#;
        let session = session_from_user_response(StatusCode::OK, body).unwrap().unwrap();

        assert_eq!(session.user_id, UserId::new("abc-123"));
        assert_eq!(session.email.as_deref(), Some("chef@example.com"));
    }

    #[test]
    fn server_error_is_an_error() {
        let err = session_from_user_response(StatusCode::BAD_GATEWAY, "down").unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 502, .. }));
    }

    #[test]
    fn anon_key_is_bearer_without_user_token() {
        let backend = SupabaseBackend::new(BackendConfig::new("https://db.example.com", "anon-key"));
        let headers = backend.headers(None).unwrap();

        assert_eq!(headers["apikey"], "anon-key");
        assert_eq!(headers[AUTHORIZATION], "Bearer anon-key");

        let headers = backend.headers(Some("user-token")).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer user-token");
    }
}
