pub mod clients;
pub mod config;
pub mod login;
pub mod quote;

use orcalite_core::ActionError;

/// Logs the underlying failure and converts it into the notice the user
/// sees, carried as the process exit error.
pub(crate) fn surface(error: ActionError) -> anyhow::Error {
    tracing::warn!(%error, "action failed");
    anyhow::anyhow!("{}", error.user_message())
}
