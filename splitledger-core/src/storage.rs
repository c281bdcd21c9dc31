//! Durable ledger store backed by RocksDB
//!
//! One column family, `transactions`, keyed by transaction id with
//! bincode-encoded values. Every `list_all` scans the full family; the
//! ledger is a per-household transaction list, not a high-volume log, and
//! the balance calculator re-folds it on every read anyway.

use crate::{
    config::Config,
    error::{Error, Result},
    store::LedgerStore,
    types::Transaction,
};
use async_trait::async_trait;
use rocksdb::{BoundColumnFamily, ColumnFamilyDescriptor, IteratorMode, Options, DB};
use std::sync::Arc;
use uuid::Uuid;

const CF_TRANSACTIONS: &str = "transactions";

/// RocksDB-backed ledger store
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Open or create the database
    pub fn open(config: &Config) -> Result<Self> {
        let path = &config.data_dir;

        std::fs::create_dir_all(path)?;

        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);
        db_opts.set_write_buffer_size(config.rocksdb.write_buffer_size_mb * 1024 * 1024);
        db_opts.set_max_background_jobs(config.rocksdb.max_background_jobs);

        let cf_descriptors = vec![ColumnFamilyDescriptor::new(
            CF_TRANSACTIONS,
            Self::cf_options_transactions(),
        )];

        let db = DB::open_cf_descriptors(&db_opts, path, cf_descriptors)?;

        tracing::info!(path = ?path, "Opened ledger store");

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_options_transactions() -> Options {
        let mut opts = Options::default();
        opts.set_compression_type(rocksdb::DBCompressionType::Zstd);
        opts
    }

    // Under the multi-threaded-cf feature, handles are shared `Arc`s
    // bound to the DB's lifetime, not plain references.
    fn cf_handle(&self) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(CF_TRANSACTIONS)
            .ok_or_else(|| Error::Store(format!("Column family {} not found", CF_TRANSACTIONS)))
    }

    /// Fetch a single transaction by id
    pub fn get(&self, id: Uuid) -> Result<Transaction> {
        let cf = self.cf_handle()?;
        let value = self
            .db
            .get_cf(&cf, id.as_bytes())?
            .ok_or_else(|| Error::TransactionNotFound(id.to_string()))?;
        let transaction: Transaction = bincode::deserialize(&value)?;
        Ok(transaction)
    }
}

#[async_trait]
impl LedgerStore for RocksDbStore {
    async fn append(&self, transaction: Transaction) -> Result<Uuid> {
        let cf = self.cf_handle()?;
        let id = transaction.id;
        let value = bincode::serialize(&transaction)?;

        self.db.put_cf(&cf, id.as_bytes(), &value)?;

        tracing::debug!(
            transaction_id = %id,
            payer = %transaction.payer,
            amount = %transaction.amount,
            "Transaction appended"
        );

        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Transaction>> {
        let cf = self.cf_handle()?;
        let iter = self.db.iterator_cf(&cf, IteratorMode::Start);

        let mut transactions = Vec::new();
        for item in iter {
            let (_, value) = item?;
            let transaction: Transaction = bincode::deserialize(&value)?;
            transactions.push(transaction);
        }

        Ok(transactions)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let cf = self.cf_handle()?;

        // Surface a NotFound instead of silently acking a no-op delete
        if self.db.get_cf(&cf, id.as_bytes())?.is_none() {
            return Err(Error::TransactionNotFound(id.to_string()));
        }

        self.db.delete_cf(&cf, id.as_bytes())?;

        tracing::debug!(transaction_id = %id, "Transaction retracted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Beneficiary, Currency, Party, TransactionKind};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn test_store() -> (RocksDbStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.data_dir = temp_dir.path().to_path_buf();
        (RocksDbStore::open(&config).unwrap(), temp_dir)
    }

    fn test_transaction(cents: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            payer: Party::A,
            beneficiary: Beneficiary::Both,
            amount: Decimal::new(cents, 2),
            currency: Currency::USD,
            kind: TransactionKind::Expense,
            memo: "groceries".to_string(),
            occurred_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_and_get() {
        let (store, _temp) = test_store();
        let txn = test_transaction(10000);

        let id = store.append(txn.clone()).await.unwrap();
        assert_eq!(id, txn.id);

        let retrieved = store.get(id).unwrap();
        assert_eq!(retrieved.id, txn.id);
        assert_eq!(retrieved.amount, txn.amount);
        assert_eq!(retrieved.memo, txn.memo);
    }

    #[tokio::test]
    async fn test_list_all() {
        let (store, _temp) = test_store();
        for cents in [1000, 2000, 3000] {
            store.append(test_transaction(cents)).await.unwrap();
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_delete() {
        let (store, _temp) = test_store();
        let txn = test_transaction(5000);
        store.append(txn.clone()).await.unwrap();

        store.delete(txn.id).await.unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
        assert!(matches!(
            store.get(txn.id),
            Err(Error::TransactionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_is_error() {
        let (store, _temp) = test_store();
        let result = store.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(Error::TransactionNotFound(_))));
    }

    #[tokio::test]
    async fn test_shared_store_concurrent_appends() {
        // Column family handles are resolved per call, so a shared store
        // can serve appends from multiple tasks at once
        let (store, _temp) = test_store();
        let store = Arc::new(store);

        let mut handles = Vec::new();
        for i in 0i64..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(test_transaction(100 * (i + 1))).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.list_all().await.unwrap().len(), 8);
    }
}
