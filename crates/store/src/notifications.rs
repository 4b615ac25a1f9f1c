//! Notification records

use chrono::Utc;
use common::models::{Notification, NotificationKind};
use common::{Error, Result};
use uuid::Uuid;

use crate::Ledger;

/// Create a notification for a user
pub async fn insert(
    ledger: &Ledger,
    user_id: Uuid,
    kind: NotificationKind,
    title: &str,
    message: &str,
    data: serde_json::Value,
) -> Result<Notification> {
    let mut db = ledger.write().await;
    let notification = Notification {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_string(),
        message: message.to_string(),
        kind,
        data,
        is_read: false,
        created_at: Utc::now(),
    };
    db.notifications.insert(notification.id, notification.clone());
    Ok(notification)
}

/// A user's notifications, newest first
pub async fn list_for(ledger: &Ledger, user_id: Uuid) -> Result<Vec<Notification>> {
    let db = ledger.read().await;
    let mut items: Vec<Notification> = db
        .notifications
        .values()
        .filter(|n| n.user_id == user_id)
        .cloned()
        .collect();
    items.sort_by_key(|n| std::cmp::Reverse((n.created_at, n.id)));
    Ok(items)
}

/// Mark one of the user's notifications as read
pub async fn mark_read(ledger: &Ledger, id: Uuid, user_id: Uuid) -> Result<Notification> {
    let mut db = ledger.write().await;
    let notification = db
        .notifications
        .get_mut(&id)
        .filter(|n| n.user_id == user_id)
        .ok_or_else(|| Error::NotFound(format!("notification {}", id)))?;
    notification.is_read = true;
    Ok(notification.clone())
}
