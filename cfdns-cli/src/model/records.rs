//! Record snapshot

use cfdns_provider::DnsRecord;

use crate::error::InputError;

/// The zone's records as last fetched, addressed by 1-based display index.
///
/// Indices are only meaningful for the list they were printed from, so callers
/// replace the snapshot with a fresh fetch before resolving anything the user typed.
#[derive(Debug, Default)]
pub struct RecordSnapshot {
    records: Vec<DnsRecord>,
}

/// Outcome of resolving a batch of display indices.
#[derive(Debug, Default)]
pub struct Resolution<'a> {
    /// Selected records, in the order first named, each at most once.
    pub records: Vec<&'a DnsRecord>,
    /// Indices that name no record.
    pub rejected: Vec<InputError>,
}

impl RecordSnapshot {
    pub fn replace(&mut self, records: Vec<DnsRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[DnsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at 1-based `index`.
    pub fn get(&self, index: usize) -> Result<&DnsRecord, InputError> {
        index
            .checked_sub(1)
            .and_then(|i| self.records.get(i))
            .ok_or(InputError::OutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Resolve 1-based indices; zero and out-of-range ones are rejected, repeats dropped.
    pub fn resolve(&self, indices: &[usize]) -> Resolution<'_> {
        let mut resolution = Resolution::default();
        let mut seen = Vec::with_capacity(indices.len());

        for &index in indices {
            if seen.contains(&index) {
                continue;
            }
            seen.push(index);

            match self.get(index) {
                Ok(record) => resolution.records.push(record),
                Err(e) => resolution.rejected.push(e),
            }
        }

        resolution
    }
}
