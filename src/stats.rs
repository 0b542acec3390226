// Read-only aggregation over a ledger plus the collaborator's off-chain
// count. Pure scan; the only failure mode is an unparseable block timestamp,
// which is reported rather than silently zeroed.

use crate::ledger::Ledger;
use chrono::DateTime;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("unparseable timestamp in block {index}")]
    TimestampParse {
        index: u64,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LedgerStats {
    pub total_blocks: usize,
    /// On-chain records exclude genesis.
    pub total_on_chain_records: usize,
    /// Supplied by the collaborator; the engine does not store off-chain records.
    pub total_off_chain_records: usize,
    pub chain_valid: bool,
    /// Cumulative proof-of-work effort: sum of all nonces.
    pub total_proof_of_work: u64,
    /// Mean of consecutive non-genesis timestamp deltas, in seconds; 0.0 when
    /// fewer than two non-genesis blocks exist.
    pub average_inter_block_seconds: f64,
    pub latest_block_hash: String,
}

pub fn compute_stats(ledger: &Ledger, off_chain_count: usize) -> Result<LedgerStats, StatsError> {
    let chain = ledger.chain();

    let mut timestamps = Vec::with_capacity(chain.len().saturating_sub(1));
    for block in chain.iter().skip(1) {
        let parsed = DateTime::parse_from_rfc3339(&block.timestamp).map_err(|source| {
            StatsError::TimestampParse {
                index: block.index,
                source,
            }
        })?;
        timestamps.push(parsed);
    }

    let average_inter_block_seconds = if timestamps.len() > 1 {
        let total: f64 = timestamps
            .windows(2)
            .map(|w| (w[1] - w[0]).num_milliseconds() as f64 / 1000.0)
            .sum();
        total / (timestamps.len() - 1) as f64
    } else {
        0.0
    };

    Ok(LedgerStats {
        total_blocks: chain.len(),
        total_on_chain_records: chain.len().saturating_sub(1),
        total_off_chain_records: off_chain_count,
        chain_valid: ledger.is_valid(),
        total_proof_of_work: ledger.total_work(),
        average_inter_block_seconds,
        latest_block_hash: chain
            .last()
            .map(|b| b.hash.clone())
            .unwrap_or_else(|| "N/A".to_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::record::{PatentRecord, PatentType, Priority};

    fn record(title: &str) -> PatentRecord {
        PatentRecord::new(
            title,
            "stats test payload",
            "Tester",
            PatentType::Provisional,
            Priority::Normal,
        )
    }

    fn append_at(ledger: &mut Ledger, title: &str, timestamp: &str) {
        let block = Block::new(
            ledger.chain().len() as u64,
            timestamp.to_owned(),
            record(title),
            String::new(),
        );
        ledger.append(block).expect("append");
    }

    #[test]
    fn genesis_only_ledger() {
        let ledger = Ledger::new(1);
        let stats = compute_stats(&ledger, 0).expect("stats");
        assert_eq!(stats.total_blocks, 1);
        assert_eq!(stats.total_on_chain_records, 0);
        assert!(stats.chain_valid);
        assert_eq!(stats.average_inter_block_seconds, 0.0);
        assert_eq!(stats.latest_block_hash, ledger.chain()[0].hash);
    }

    #[test]
    fn single_record_has_zero_average() {
        let mut ledger = Ledger::new(1);
        append_at(&mut ledger, "A", "2024-03-01T12:00:00+00:00");
        let stats = compute_stats(&ledger, 0).expect("stats");
        assert_eq!(stats.total_on_chain_records, 1);
        assert_eq!(stats.average_inter_block_seconds, 0.0);
    }

    #[test]
    fn two_records_ten_seconds_apart() {
        let mut ledger = Ledger::new(1);
        append_at(&mut ledger, "A", "2024-03-01T12:00:00+00:00");
        append_at(&mut ledger, "B", "2024-03-01T12:00:10+00:00");
        let stats = compute_stats(&ledger, 0).expect("stats");
        assert_eq!(stats.average_inter_block_seconds, 10.0);
    }

    #[test]
    fn averages_consecutive_deltas() {
        let mut ledger = Ledger::new(1);
        append_at(&mut ledger, "A", "2024-03-01T12:00:00+00:00");
        append_at(&mut ledger, "B", "2024-03-01T12:00:10+00:00");
        append_at(&mut ledger, "C", "2024-03-01T12:00:40+00:00");
        let stats = compute_stats(&ledger, 0).expect("stats");
        assert_eq!(stats.average_inter_block_seconds, 20.0);
    }

    #[test]
    fn off_chain_count_is_passed_through() {
        let ledger = Ledger::new(1);
        let stats = compute_stats(&ledger, 7).expect("stats");
        assert_eq!(stats.total_off_chain_records, 7);
    }

    #[test]
    fn proof_of_work_totals_nonces() {
        let mut ledger = Ledger::new(1);
        append_at(&mut ledger, "A", "2024-03-01T12:00:00+00:00");
        let expected: u64 = ledger.chain().iter().map(|b| b.nonce).sum();
        let stats = compute_stats(&ledger, 0).expect("stats");
        assert_eq!(stats.total_proof_of_work, expected);
    }

    #[test]
    fn bad_timestamp_is_reported_not_zeroed() {
        let mut ledger = Ledger::new(1);
        append_at(&mut ledger, "A", "yesterday, around noon");
        let err = compute_stats(&ledger, 0).expect_err("must fail");
        assert!(matches!(err, StatsError::TimestampParse { index: 1, .. }));
    }
}
