//! Runs fetch requests in the background

use super::{FetchOutcome, FetchRequest};
use crate::catalog::CardSource;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Execute `request` on its own task and send the outcome back over `tx`
///
/// Requests are never cancelled; superseded ones still complete and are
/// discarded by the session when their outcome arrives.
pub fn spawn_fetch(
    source: Arc<CardSource>,
    request: FetchRequest,
    tx: mpsc::Sender<FetchOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!(
            seq = request.seq,
            page = request.query.page,
            "Fetching cards for '{}'",
            request.query.name
        );
        let result = source.fetch_page(&request.query).await;
        if tx
            .send(FetchOutcome {
                seq: request.seq,
                result,
            })
            .await
            .is_err()
        {
            tracing::trace!("Fetch outcome dropped: receiver closed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardQuery, DemoCatalog};
    use std::time::Duration;

    #[tokio::test]
    async fn outcome_carries_request_seq() {
        let source = Arc::new(CardSource::Demo(
            DemoCatalog::new().with_latency(Duration::ZERO),
        ));
        let (tx, mut rx) = mpsc::channel(4);

        let request = FetchRequest {
            seq: 7,
            query: CardQuery::new(1, 5, ""),
        };
        spawn_fetch(source, request, tx).await.unwrap();

        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(outcome.seq, 7);
        assert_eq!(outcome.result.unwrap().cards.len(), 5);
    }
}
