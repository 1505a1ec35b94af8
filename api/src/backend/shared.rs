//! Lazily builds the process-wide backend client.

use super::supabase::SupabaseBackend;
use super::BackendConfig;
use super::BackendError;
use tokio::sync::OnceCell;

/// Returns the shared backend, reading configuration on first use.
///
/// A configuration error is not cached: the next call tries again, so fixing
/// the environment does not need a restart.
pub async fn backend() -> Result<&'static SupabaseBackend, BackendError> {
    static BACKEND: OnceCell<SupabaseBackend> = OnceCell::const_new();

    BACKEND
        .get_or_try_init(|| async {
            let config = BackendConfig::from_env()?;
            dioxus_logger::tracing::info!("backend configured: {:?}", config);
            Ok::<_, BackendError>(SupabaseBackend::new(config))
        })
        .await
}
