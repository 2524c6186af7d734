//! Quote submission: payload assembly, the single POST, and the
//! post-submission store policy.

use std::time::Duration;

use chrono::Utc;
use tracing::info;

use orcalite_core::{
    ActionError, ClientId, Quote, QuoteNumberAllocator, QuotePayload, SelectionError, Session,
};

use crate::gateway::ApiGateway;

/// What one submission attempt did to the session, alongside its outcome.
/// The caller owns the fixed pause and the view refresh that follow.
#[derive(Debug)]
pub struct SubmitReport {
    pub outcome: Result<Quote, ActionError>,
    pub store_cleared: bool,
    pub refresh_after: Duration,
}

/// Builds the payload from the session's line items and submits it once.
///
/// The selected-client precondition is checked before any network I/O:
/// submitting without a selection is a `SelectionError`, never a request
/// with a stale client id. On success the store is always cleared; on
/// failure it is cleared only when the configured policy says so.
pub async fn submit_quote(
    gateway: &ApiGateway,
    session: &mut Session,
    selected: Option<&ClientId>,
) -> Result<SubmitReport, SelectionError> {
    let Some(cliente_id) = selected else {
        return Err(SelectionError::NoneSelected);
    };

    let payload = QuotePayload::new(
        cliente_id.clone(),
        session.numbers.next(),
        Utc::now(),
        session.items.items().to_vec(),
    );
    info!(
        cliente_id = %payload.cliente_id,
        num_orc = %payload.num_orc,
        itens = payload.itens.len(),
        "submitting quote"
    );

    let outcome = gateway.create_quote(&payload).await;
    let store_cleared = match &outcome {
        Ok(_) => {
            session.items.clear();
            true
        }
        Err(_) if gateway.config().reset_items_on_failure => {
            session.items.clear();
            true
        }
        Err(_) => false,
    };

    Ok(SubmitReport {
        outcome,
        store_cleared,
        refresh_after: Duration::from_secs(gateway.config().refresh_pause_secs),
    })
}
