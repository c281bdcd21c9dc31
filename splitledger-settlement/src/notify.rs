//! Notification sink abstraction
//!
//! Settlement confirmations emit a best-effort message to the
//! counterparty. The sink is an injected collaborator so ledger
//! correctness never depends on notification plumbing; failures are
//! logged by the engine and swallowed.

use crate::error::{Error, Result};
use async_trait::async_trait;
use splitledger_core::Party;

/// One outbound notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Which party receives it
    pub recipient: Party,

    /// Short title
    pub title: String,

    /// Message body
    pub body: String,

    /// Category for routing in the host app
    pub category: String,

    /// Deep link into the ledger screen
    pub deep_link: String,
}

/// Best-effort, fire-and-forget notification sink
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification
    async fn notify(&self, notification: Notification) -> Result<()>;
}

/// Sink that only logs, for embedding without a push backend
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn notify(&self, notification: Notification) -> Result<()> {
        tracing::info!(
            recipient = %notification.recipient,
            category = %notification.category,
            title = %notification.title,
            "Notification dispatched"
        );
        Ok(())
    }
}

/// Sink that records every notification, for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: parking_lot::Mutex<Vec<Notification>>,
}

impl RecordingSink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications delivered so far
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, notification: Notification) -> Result<()> {
        self.sent.lock().push(notification);
        Ok(())
    }
}

/// Sink that always fails, for exercising the best-effort boundary
#[derive(Debug, Default)]
pub struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn notify(&self, _notification: Notification) -> Result<()> {
        Err(Error::Notification("sink unavailable".to_string()))
    }
}
