// Per-session engine context. One session per logical caller: it owns its
// ledger and jitter source outright, so there is no process-wide state and
// nothing to lock. The UI collaborator keeps its own off-chain list; the
// engine only hands back timestamped receipts.

use crate::block::{current_timestamp, Block};
use crate::ledger::{Ledger, LedgerError};
use crate::record::PatentRecord;
use crate::scoring::{score_record, RandomJitter, ScoreJitter};
use crate::stats::{compute_stats, LedgerStats, StatsError};
use crate::validation::{validate_record, ValidationError};
use crate::DEFAULT_DIFFICULTY;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Receipt for a record the caller keeps off-chain. Not stored by the engine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OffChainRecord {
    pub timestamp: String,
    pub record: PatentRecord,
}

pub struct PatentSession {
    ledger: Ledger,
    jitter: Box<dyn ScoreJitter>,
}

impl PatentSession {
    pub fn new(difficulty: usize) -> Self {
        Self::with_jitter(difficulty, Box::new(RandomJitter))
    }

    /// Substitute the scoring jitter source (tests pin it to a constant).
    pub fn with_jitter(difficulty: usize, jitter: Box<dyn ScoreJitter>) -> Self {
        PatentSession {
            ledger: Ledger::new(difficulty),
            jitter,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validate, wrap in a block at the next index, mine, append, and return
    /// the sealed block. Mining is blocking; see crate docs for the session
    /// threading model.
    pub fn submit_on_chain(&mut self, record: PatentRecord) -> Result<&Block, EngineError> {
        validate_record(&record)?;
        let block = Block::new(
            self.ledger.chain().len() as u64,
            current_timestamp(),
            record,
            String::new(),
        );
        self.ledger.append(block)?;
        let sealed = self.ledger.latest()?;
        info!(
            index = sealed.index,
            patent_id = %sealed.payload.id,
            "record sealed on-chain"
        );
        Ok(sealed)
    }

    /// Validate and timestamp a record the collaborator stores itself.
    pub fn submit_off_chain(&self, record: PatentRecord) -> Result<OffChainRecord, EngineError> {
        validate_record(&record)?;
        Ok(OffChainRecord {
            timestamp: current_timestamp(),
            record,
        })
    }

    /// Read-only view of the chain, genesis first.
    pub fn chain(&self) -> &[Block] {
        self.ledger.chain()
    }

    pub fn validate(&self) -> bool {
        self.ledger.is_valid()
    }

    pub fn statistics(&self, off_chain_count: usize) -> Result<LedgerStats, EngineError> {
        Ok(compute_stats(&self.ledger, off_chain_count)?)
    }

    /// Authenticity score using the session's jitter source.
    pub fn score(&mut self, record: &PatentRecord) -> u8 {
        score_record(record, self.jitter.as_mut())
    }
}

impl Default for PatentSession {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}
