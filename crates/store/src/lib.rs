//! Ledger store for EcoQuest
//!
//! An in-process, document-style record store: named collections of records
//! keyed by a stable id, shared behind a single async writer lock. Every
//! operation commits or fails as a unit, so no partial state survives a
//! failed call, and a snapshot read never observes a half-updated record.

use std::collections::HashMap;
use std::sync::Arc;

use common::models::{Notification, Redemption, Reward, ScoringEvent, User, UtilityBill};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

pub mod bills;
pub mod events;
pub mod notifications;
pub mod rewards;
pub mod users;

/// The named collections, keyed by stable identifiers
#[derive(Default)]
pub(crate) struct Collections {
    pub users: HashMap<Uuid, User>,
    pub bills: HashMap<Uuid, UtilityBill>,
    /// Keyed by the scoring event's idempotency key
    pub events: HashMap<String, ScoringEvent>,
    pub rewards: HashMap<Uuid, Reward>,
    pub redemptions: HashMap<Uuid, Redemption>,
    pub notifications: HashMap<Uuid, Notification>,
}

/// Handle to the ledger store; cheap to clone
#[derive(Clone)]
pub struct Ledger {
    inner: Arc<RwLock<Collections>>,
}

impl Ledger {
    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().await
    }
}

/// Open an empty ledger store
pub fn open() -> Ledger {
    info!("Opening ledger store");
    Ledger {
        inner: Arc::new(RwLock::new(Collections::default())),
    }
}
