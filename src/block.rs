// One ledger entry: index, timestamp, payload, parent link, proof-of-work
// nonce, derived hashes. All hashing is SHA-256 over text, hex-encoded
// lowercase, so block fields display and export without translation.

use crate::record::PatentRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

/// RFC 3339 UTC timestamp for a block being constructed now.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    /// Captured at construction time, not mining time.
    pub timestamp: String,
    pub payload: PatentRecord,
    pub previous_hash: String,
    pub nonce: u64,
    /// SHA-256 over index ++ timestamp ++ canonical(payload) ++ previous_hash
    /// ++ nonce, integers rendered as decimal text.
    pub hash: String,
    /// Hash of the payload alone; independent of nonce and parent link.
    pub content_digest: String,
}

impl Block {
    /// Construct with `nonce = 0` and both hashes computed. No mining happens
    /// here; the block is unsealed until `mine` runs.
    pub fn new(
        index: u64,
        timestamp: String,
        payload: PatentRecord,
        previous_hash: String,
    ) -> Self {
        let mut block = Block {
            index,
            timestamp,
            payload,
            previous_hash,
            nonce: 0,
            hash: String::new(),
            content_digest: String::new(),
        };
        block.hash = block.recompute_hash();
        block.content_digest = block.recompute_content_digest();
        block
    }

    /// Deterministic function of the five hashed fields. The concatenation
    /// order and the payload's canonical JSON are frozen contract: the same
    /// inputs must reproduce the same hex string anywhere.
    pub fn recompute_hash(&self) -> String {
        let material = format!(
            "{}{}{}{}{}",
            self.index,
            self.timestamp,
            self.payload.canonical_json(),
            self.previous_hash,
            self.nonce
        );
        hex::encode(Sha256::digest(material.as_bytes()))
    }

    /// Digest of the canonical payload alone (the simplified "Merkle root").
    pub fn recompute_content_digest(&self) -> String {
        hex::encode(Sha256::digest(self.payload.canonical_json().as_bytes()))
    }

    /// Brute-force nonce search until `hash` starts with `difficulty` zero
    /// hex characters. No iteration cap: for realistic difficulty (<= ~4) a
    /// match is practically certain within a bounded search, but a very large
    /// difficulty would loop effectively forever.
    pub fn mine(&mut self, difficulty: usize) {
        let target = "0".repeat(difficulty);
        while !self.hash.starts_with(&target) {
            self.nonce += 1;
            self.hash = self.recompute_hash();
        }
        debug!(index = self.index, nonce = self.nonce, "block sealed");
    }
}
