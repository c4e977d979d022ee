//! The local lead log.
//!
//! Leads are appended to a JSON array kept under a single key in a
//! string store (browser local storage in the app, an in-memory map in
//! tests). There is no schema versioning and no deduplication; the log
//! exists for manual reconciliation only.

use thiserror::Error;

use crate::lead::Lead;

/// Storage key the storefront has always used.
pub const DEFAULT_LOG_KEY: &str = "sports_leads";

/// Errors from recording a lead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeadError {
    /// The backing store rejected the write.
    #[error("Lead store error: {0}")]
    Store(String),

    /// The lead could not be serialized.
    #[error("Lead serialization error: {0}")]
    Serialize(String),
}

/// A string key/value store the lead log writes through.
pub trait LeadStore {
    /// Read the raw value under a key, if present.
    fn read(&self, key: &str) -> Option<String>;

    /// Write the raw value under a key.
    fn write(&mut self, key: &str, value: &str) -> Result<(), LeadError>;
}

/// An in-memory store for native targets and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLeadStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadStore for MemoryLeadStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), LeadError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Append-only lead log over a [`LeadStore`].
#[derive(Debug, Clone)]
pub struct LeadLog<S> {
    store: S,
    key: String,
}

impl<S: LeadStore> LeadLog<S> {
    /// Create a log over a store, using the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_LOG_KEY)
    }

    /// Create a log under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Append a lead to the stored array.
    ///
    /// Absent or unreadable stored state is treated as an empty log rather
    /// than an error, so one corrupt write cannot wedge lead capture.
    pub fn append(&mut self, lead: &Lead) -> Result<(), LeadError> {
        let mut records = self.raw_records();
        let value =
            serde_json::to_value(lead).map_err(|e| LeadError::Serialize(e.to_string()))?;
        records.push(value);
        let serialized = serde_json::to_string(&records)
            .map_err(|e| LeadError::Serialize(e.to_string()))?;
        self.store.write(&self.key, &serialized)?;
        tracing::debug!(lead_id = %lead.lead_id, "lead recorded");
        Ok(())
    }

    /// All leads that still parse as lead records.
    pub fn leads(&self) -> Vec<Lead> {
        self.raw_records()
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }

    /// Number of stored records, parsable or not.
    pub fn len(&self) -> usize {
        self.raw_records().len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn raw_records(&self) -> Vec<serde_json::Value> {
        self.store
            .read(&self.key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::LeadId;
    use crate::size::ShoeSize;
    use vitrina_commerce::catalog::Catalog;

    fn sample_lead() -> Lead {
        let catalog = Catalog::demo();
        Lead::declined(
            LeadId::generate(),
            &catalog.products()[0],
            &ShoeSize::new("9", "43"),
        )
    }

    #[test]
    fn test_append_and_read_back() {
        let mut log = LeadLog::new(MemoryLeadStore::new());
        log.append(&sample_lead()).unwrap();
        log.append(&sample_lead()).unwrap();

        assert_eq!(log.len(), 2);
        let leads = log.leads();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].product, "Nike Air Max Pro");
    }

    #[test]
    fn test_append_preserves_existing_records() {
        let mut store = MemoryLeadStore::new();
        store
            .write(DEFAULT_LOG_KEY, r#"[{"legacy":"record"}]"#)
            .unwrap();

        let mut log = LeadLog::new(store);
        log.append(&sample_lead()).unwrap();

        // The unparsable legacy record stays in the array.
        assert_eq!(log.len(), 2);
        assert_eq!(log.leads().len(), 1);
    }

    #[test]
    fn test_corrupt_state_is_treated_as_empty() {
        let mut store = MemoryLeadStore::new();
        store.write(DEFAULT_LOG_KEY, "not json at all").unwrap();

        let mut log = LeadLog::new(store);
        assert!(log.is_empty());
        log.append(&sample_lead()).unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_custom_key() {
        let mut log = LeadLog::with_key(MemoryLeadStore::new(), "other_leads");
        log.append(&sample_lead()).unwrap();
        assert_eq!(log.len(), 1);
    }
}
