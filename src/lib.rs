// Patent ledger engine: deterministic, in-memory, audit-first.
//
// Blocks are hash-chained and sealed by a leading-zero proof-of-work search;
// the authenticity scorer is the one deliberately non-deterministic piece,
// behind an injectable jitter source. One `PatentSession` per logical caller;
// the engine holds no global state and no locks, so a session must not be
// shared mutably across threads without external synchronization.

pub mod block;
pub mod ledger;
pub mod record;
pub mod scoring;
pub mod session;
pub mod stats;
pub mod validation;

/// Leading zero hex characters required of a sealed block hash.
pub const DEFAULT_DIFFICULTY: usize = 2;
