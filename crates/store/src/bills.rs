//! Utility bill records
//!
//! Bills are append-only: corrections are new entries, so the per-utility
//! consumption history stays auditable.

use common::models::{UtilityBill, UtilityKind};
use common::Result;
use uuid::Uuid;

use crate::Ledger;

/// Persist a bill
pub async fn insert(ledger: &Ledger, bill: UtilityBill) -> Result<UtilityBill> {
    let mut db = ledger.write().await;
    db.bills.insert(bill.id, bill.clone());
    Ok(bill)
}

/// Latest bill of a given kind for a user, the baseline for the next delta
pub async fn latest_for(
    ledger: &Ledger,
    user_id: Uuid,
    kind: UtilityKind,
) -> Result<Option<UtilityBill>> {
    let db = ledger.read().await;
    Ok(db
        .bills
        .values()
        .filter(|b| b.user_id == user_id && b.kind == kind)
        .max_by_key(|b| (b.created_at, b.id))
        .cloned())
}

/// All bills for a user, newest first
pub async fn list_for(ledger: &Ledger, user_id: Uuid) -> Result<Vec<UtilityBill>> {
    let db = ledger.read().await;
    let mut bills: Vec<UtilityBill> = db
        .bills
        .values()
        .filter(|b| b.user_id == user_id)
        .cloned()
        .collect();
    bills.sort_by_key(|b| std::cmp::Reverse((b.created_at, b.id)));
    Ok(bills)
}
