//! Settlement engine
//!
//! Orchestrates the ledger store, balance recomputation, settlement
//! planning, and best-effort notification. The engine is stateless:
//! every read re-folds the full transaction set, so concurrent appends
//! never race on a cached balance.

use crate::{
    config::Config,
    notify::{Notification, NotificationSink},
    planner::{SettlementPlan, SettlementPlanner, SettlementProposal},
    Result,
};
use chrono::Utc;
use splitledger_core::{
    balance, Currency, LedgerStore, LedgerView, NetBalance, Parties, Transaction,
    TransactionDraft,
};
use std::sync::Arc;
use uuid::Uuid;

/// Settlement engine
pub struct SettlementEngine {
    /// Durable transaction list (external collaborator)
    store: Arc<dyn LedgerStore>,

    /// Best-effort notification sink (external collaborator)
    sink: Arc<dyn NotificationSink>,

    /// Planner with the configured tolerance
    planner: SettlementPlanner,

    /// Display names for the two parties
    parties: Parties,

    /// Reporting currency
    currency: Currency,

    /// Configuration
    config: Config,
}

impl SettlementEngine {
    /// Create a new engine over the injected collaborators
    pub fn new(
        store: Arc<dyn LedgerStore>,
        sink: Arc<dyn NotificationSink>,
        parties: Parties,
        currency: Currency,
        config: Config,
    ) -> Result<Self> {
        config.validate()?;
        let planner = SettlementPlanner::new(config.tolerance);
        Ok(Self {
            store,
            sink,
            planner,
            parties,
            currency,
            config,
        })
    }

    /// Validate a draft and append the resulting transaction
    ///
    /// Validation failures reject before any store call. Store failures
    /// are retryable; nothing partial is written and the caller keeps the
    /// draft for resubmission.
    pub async fn record(&self, draft: &TransactionDraft) -> Result<Transaction> {
        let transaction = draft.validate()?;
        self.store.append(transaction.clone()).await?;

        tracing::info!(
            transaction_id = %transaction.id,
            payer = %self.parties.name(transaction.payer),
            amount = %transaction.amount,
            kind = %transaction.kind,
            "Transaction recorded"
        );

        Ok(transaction)
    }

    /// Derive the full ledger view from the current transaction set
    pub async fn ledger_view(&self) -> Result<LedgerView> {
        let transactions = self.store.list_all().await?;
        Ok(balance::compute(transactions))
    }

    /// Current net balance
    pub async fn net_balance(&self) -> Result<NetBalance> {
        Ok(self.ledger_view().await?.net)
    }

    /// Plan a settlement against the current balance
    pub async fn plan_settlement(&self) -> Result<SettlementPlan> {
        let net = self.net_balance().await?;
        Ok(self.planner.plan(net))
    }

    /// Confirm a proposal: append the settlement transaction, then notify
    ///
    /// The notification is best-effort; a sink failure is logged and
    /// swallowed, never rolling back the appended settlement. Guarding
    /// against rapid repeat confirmation is the caller's responsibility.
    pub async fn confirm_settlement(
        &self,
        proposal: SettlementProposal,
    ) -> Result<Transaction> {
        let occurred_at = Utc::now().date_naive();
        let owed_party = proposal.owed_party;
        let transaction = proposal.into_transaction(self.currency, occurred_at);

        self.store.append(transaction.clone()).await?;

        tracing::info!(
            transaction_id = %transaction.id,
            payer = %self.parties.name(transaction.payer),
            amount = %transaction.amount,
            "Settlement recorded"
        );

        let notification = Notification {
            recipient: owed_party,
            title: self.config.notification_title.clone(),
            body: format!(
                "{} settled {} {} with you",
                self.parties.name(transaction.payer),
                transaction.amount,
                self.currency,
            ),
            category: self.config.notification_category.clone(),
            deep_link: self.config.deep_link.clone(),
        };

        if let Err(err) = self.sink.notify(notification).await {
            tracing::warn!(error = %err, "Settlement notification failed; continuing");
        }

        Ok(transaction)
    }

    /// Hard-delete a transaction; the next read recomputes from scratch
    pub async fn retract(&self, id: Uuid) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!(transaction_id = %id, "Transaction retracted");
        Ok(())
    }
}
