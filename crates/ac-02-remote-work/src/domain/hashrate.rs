//! Remote hashrate reports keyed by solver id.

use shared_types::H256;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashrateRecord {
    pub rate: u64,
    pub updated: Instant,
}

#[derive(Debug, Default)]
pub struct HashrateTable {
    records: HashMap<H256, HashrateRecord>,
}

impl HashrateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rate` for `id`, replacing any earlier report from it.
    pub fn submit(&mut self, id: H256, rate: u64, now: Instant) {
        self.records.insert(id, HashrateRecord { rate, updated: now });
    }

    /// Sum of reports younger than `expiry`.
    pub fn total(&self, now: Instant, expiry: Duration) -> u64 {
        self.records
            .values()
            .filter(|record| now.saturating_duration_since(record.updated) <= expiry)
            .fold(0u64, |sum, record| sum.saturating_add(record.rate))
    }

    /// Drop reports older than `expiry`. Returns how many were removed.
    pub fn purge(&mut self, now: Instant, expiry: Duration) -> usize {
        let before = self.records.len();
        self.records
            .retain(|_, record| now.saturating_duration_since(record.updated) <= expiry);
        before - self.records.len()
    }

    pub fn get(&self, id: &H256) -> Option<&HashrateRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPIRY: Duration = Duration::from_secs(10);

    #[test]
    fn test_same_id_overwrites() {
        let now = Instant::now();
        let mut table = HashrateTable::new();
        let id = H256::repeat_byte(1);

        table.submit(id, 100, now);
        table.submit(id, 250, now);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&id).map(|r| r.rate), Some(250));
        assert_eq!(table.total(now, EXPIRY), 250);
    }

    #[test]
    fn test_expired_reports_do_not_count() {
        let start = Instant::now();
        let mut table = HashrateTable::new();
        table.submit(H256::repeat_byte(1), 100, start);
        table.submit(H256::repeat_byte(2), 50, start + Duration::from_secs(8));

        let later = start + Duration::from_secs(12);
        assert_eq!(table.total(later, EXPIRY), 50);
        assert_eq!(table.purge(later, EXPIRY), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_total_saturates() {
        let now = Instant::now();
        let mut table = HashrateTable::new();
        table.submit(H256::repeat_byte(1), u64::MAX, now);
        table.submit(H256::repeat_byte(2), 1, now);
        assert_eq!(table.total(now, EXPIRY), u64::MAX);
    }
}
