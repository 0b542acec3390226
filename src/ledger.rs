// Append-only hash chain. Separates sealing from validity: append mines the
// candidate in place; is_valid only re-checks hash consistency and parent
// linkage, never the difficulty target of already-sealed blocks.

use crate::block::{current_timestamp, Block};
use crate::record::PatentRecord;
use crate::DEFAULT_DIFFICULTY;
use thiserror::Error;
use tracing::debug;

/// Genesis marker: a block with no parent links to "0".
pub const GENESIS_PREVIOUS_HASH: &str = "0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Unreachable through the constructor contract; surfaced, not recovered.
    #[error("ledger has no blocks")]
    EmptyChain,
}

#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    /// Leading zero hex characters required of a sealed hash. Fixed per run.
    difficulty: usize,
}

impl Ledger {
    /// Build a ledger whose only block is a freshly mined genesis. Genesis is
    /// the one block mined before being linked; it has no predecessor.
    pub fn new(difficulty: usize) -> Self {
        let genesis = Self::create_genesis(difficulty);
        Ledger {
            chain: vec![genesis],
            difficulty,
        }
    }

    fn create_genesis(difficulty: usize) -> Block {
        let mut genesis = Block::new(
            0,
            current_timestamp(),
            PatentRecord::genesis(),
            GENESIS_PREVIOUS_HASH.to_owned(),
        );
        genesis.mine(difficulty);
        genesis
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Read-only view of the chain, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn latest(&self) -> Result<&Block, LedgerError> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    /// Link the candidate to the current tip, mine it at the ledger's
    /// difficulty, and push it. The caller supplies `index == chain.len()`;
    /// the ledger does not renumber blocks.
    pub fn append(&mut self, mut block: Block) -> Result<(), LedgerError> {
        block.previous_hash = self.latest()?.hash.clone();
        block.hash = block.recompute_hash();
        block.mine(self.difficulty);
        debug!(index = block.index, hash = %block.hash, "block appended");
        self.chain.push(block);
        Ok(())
    }

    /// Whole-chain scan: every block from index 1 onward must hash to its
    /// stored value and link to its predecessor. Sealed blocks are not
    /// re-checked against the difficulty target.
    pub fn is_valid(&self) -> bool {
        for i in 1..self.chain.len() {
            let current = &self.chain[i];
            if current.hash != current.recompute_hash() {
                return false;
            }
            if current.previous_hash != self.chain[i - 1].hash {
                return false;
            }
        }
        true
    }

    /// Total proof-of-work effort: sum of all nonces.
    pub fn total_work(&self) -> u64 {
        self.chain.iter().map(|b| b.nonce).sum()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}
