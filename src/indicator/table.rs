use ahash::AHashMap;
use tracing::{debug, warn};

use crate::area::{compact_name, normalize_name};
use super::IndicatorRecord;

/// Key function used to join area names across datasets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinKey {
    /// Lower-cased, trailing qualifiers and whitespace removed.
    #[default]
    Normalized,
    /// `Normalized`, then every non-alphanumeric character removed.
    Compact,
}

impl JoinKey {
    pub fn key(&self, name: &str) -> String {
        match self {
            JoinKey::Normalized => normalize_name(name),
            JoinKey::Compact => compact_name(name),
        }
    }
}

/// Name → indicator lookup, built once from a complete batch of records.
#[derive(Debug, Clone, Default)]
pub struct IndicatorTable {
    join: JoinKey,
    records: Vec<IndicatorRecord>,
    index: AHashMap<String, usize>, // join key -> position in `records`
}

impl IndicatorTable {
    /// Build the lookup. The first record for a key wins; later duplicates are ignored.
    /// Records whose name reduces to an empty key cannot be joined and are left out.
    pub fn build(records: impl IntoIterator<Item = IndicatorRecord>, join: JoinKey) -> Self {
        let mut table = Self { join, ..Default::default() };

        for record in records {
            let key = join.key(&record.name);
            if key.is_empty() {
                warn!(name = %record.name, "indicator record has no usable name; skipped");
                continue;
            }
            if table.index.contains_key(&key) {
                debug!(name = %record.name, key = %key, "duplicate indicator record ignored");
                continue;
            }
            table.index.insert(key, table.records.len());
            table.records.push(record);
        }

        table
    }

    /// Look up the record for an area name, applying the table's key function.
    pub fn get(&self, name: &str) -> Option<&IndicatorRecord> {
        self.index.get(&self.join.key(name)).map(|&i| &self.records[i])
    }

    #[inline] pub fn join_key(&self) -> JoinKey { self.join }

    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Records in first-seen order.
    #[inline] pub fn records(&self) -> &[IndicatorRecord] { &self.records }
}
