//! Scoring event records
//!
//! One record per physical action; the insert-if-absent guard on the
//! idempotency key is what makes point awards at-most-once under retries.

use common::models::{ActionCounts, ScoringEvent};
use common::Result;
use uuid::Uuid;

use crate::Ledger;

/// Record a scoring event unless its idempotency key is already present.
/// Returns false for a duplicate, in which case nothing is written.
pub async fn record(ledger: &Ledger, event: ScoringEvent) -> Result<bool> {
    let mut db = ledger.write().await;
    let key = event.key();
    if db.events.contains_key(&key) {
        return Ok(false);
    }
    db.events.insert(key, event);
    Ok(true)
}

/// Tally a user's scoring events by action kind
pub async fn counts_for(ledger: &Ledger, user_id: Uuid) -> Result<ActionCounts> {
    let db = ledger.read().await;
    let mut counts = ActionCounts::default();
    for event in db.events.values().filter(|e| e.user_id == user_id) {
        counts.bump(event.kind);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::ActionKind;

    #[tokio::test]
    async fn test_record_rejects_duplicate_key() {
        let ledger = crate::open();
        let user_id = Uuid::new_v4();

        let first = ScoringEvent::new(user_id, ActionKind::PostCreated, "post-1", 10);
        let retry = ScoringEvent::new(user_id, ActionKind::PostCreated, "post-1", 10);

        assert!(record(&ledger, first).await.unwrap());
        assert!(!record(&ledger, retry).await.unwrap());

        let counts = counts_for(&ledger, user_id).await.unwrap();
        assert_eq!(counts.posts_created, 1);
    }

    #[tokio::test]
    async fn test_same_source_different_kind_is_distinct() {
        let ledger = crate::open();
        let user_id = Uuid::new_v4();

        let filed = ScoringEvent::new(user_id, ActionKind::ReportFiled, "report-7", 20);
        let verified = ScoringEvent::new(user_id, ActionKind::ReportVerified, "report-7", 5);

        assert!(record(&ledger, filed).await.unwrap());
        assert!(record(&ledger, verified).await.unwrap());
    }
}
