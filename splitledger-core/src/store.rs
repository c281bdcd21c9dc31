//! Ledger store abstraction
//!
//! The durable transaction list is owned by the persistence layer; the
//! engine only assumes that a single append is atomic. Implementations:
//! [`MemoryStore`] here for tests and embedding, and
//! [`crate::storage::RocksDbStore`] for a durable local store.

use crate::{
    error::{Error, Result},
    types::Transaction,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

/// Durable append-only transaction list
///
/// `delete` exists because the host application permits hard deletion;
/// the engine treats it as a retraction that forces full recomputation on
/// the next read, not as a ledger primitive.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Append one transaction; returns its id on success
    async fn append(&self, transaction: Transaction) -> Result<Uuid>;

    /// List every transaction, in no guaranteed order
    async fn list_all(&self) -> Result<Vec<Transaction>>;

    /// Hard-delete a transaction by id
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// In-memory ledger store
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.read().len()
    }

    /// True when the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.transactions.read().is_empty()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn append(&self, transaction: Transaction) -> Result<Uuid> {
        let id = transaction.id;
        self.transactions.write().push(transaction);
        tracing::debug!(transaction_id = %id, "Transaction appended");
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.read().clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut transactions = self.transactions.write();
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Err(Error::TransactionNotFound(id.to_string()));
        }
        tracing::debug!(transaction_id = %id, "Transaction retracted");
        Ok(())
    }
}
