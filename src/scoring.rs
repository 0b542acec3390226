// Authenticity scoring (non-consensus, heuristic).
// A confidence rating over a record's shape, not a verifier: it carries a
// deliberate random jitter term, so identical inputs may score differently
// across calls. The jitter source is a trait seam so tests can pin it.

use crate::record::PatentRecord;
use rand::Rng;

pub const BASE_SCORE: i32 = 50;
pub const TITLE_BONUS: i32 = 10;
pub const DESCRIPTION_BONUS: i32 = 15;
pub const DOC_HASH_BONUS: i32 = 20;

/// Bounded jitter added once per scoring call. Implementations must sample
/// from [-5, 15] inclusive.
pub trait ScoreJitter {
    fn jitter(&mut self) -> i32;
}

/// Production source: uniform over [-5, 15].
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomJitter;

impl ScoreJitter for RandomJitter {
    fn jitter(&mut self) -> i32 {
        rand::thread_rng().gen_range(-5..=15)
    }
}

/// Constant source for deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedJitter(pub i32);

impl ScoreJitter for FixedJitter {
    fn jitter(&mut self) -> i32 {
        self.0
    }
}

/// Heuristic 0-100 score: base 50, +10 for a title over 10 chars, +15 for a
/// description over 50 chars, +20 for an attached document hash, plus one
/// jitter sample, clamped to [0, 100]. Lengths count Unicode scalars, not
/// bytes.
pub fn score_record(record: &PatentRecord, jitter: &mut dyn ScoreJitter) -> u8 {
    let mut score = BASE_SCORE;
    if record.title.chars().count() > 10 {
        score += TITLE_BONUS;
    }
    if record.description.chars().count() > 50 {
        score += DESCRIPTION_BONUS;
    }
    if !record.doc_hash.is_empty() {
        score += DOC_HASH_BONUS;
    }
    score += jitter.jitter();
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PatentType, Priority};

    fn record(title: &str, description: &str, doc_hash: &str) -> PatentRecord {
        let mut r = PatentRecord::new(
            title,
            description,
            "Tester",
            PatentType::Chemical,
            Priority::Normal,
        );
        r.doc_hash = doc_hash.to_owned();
        r
    }

    #[test]
    fn fixed_jitter_gives_exact_vector() {
        // 11-char title, 60-char description, attached hash, +5 jitter:
        // 50 + 10 + 15 + 20 + 5 = 100.
        let r = record("ABCDEFGHIJK", &"d".repeat(60), "deadbeef");
        assert_eq!(score_record(&r, &mut FixedJitter(5)), 100);
    }

    #[test]
    fn bare_record_scores_base_plus_jitter() {
        let r = record("Coil", "short", "");
        assert_eq!(score_record(&r, &mut FixedJitter(0)), 50);
        assert_eq!(score_record(&r, &mut FixedJitter(-5)), 45);
    }

    #[test]
    fn boundary_lengths_do_not_earn_bonuses() {
        // Exactly 10 and exactly 50 are not "over".
        let r = record(&"t".repeat(10), &"d".repeat(50), "");
        assert_eq!(score_record(&r, &mut FixedJitter(0)), 50);
        let r = record(&"t".repeat(11), &"d".repeat(51), "");
        assert_eq!(score_record(&r, &mut FixedJitter(0)), 75);
    }

    #[test]
    fn length_counts_unicode_scalars() {
        // 11 scalars, more than 11 bytes.
        let r = record("ééééééééééé", "short", "");
        assert_eq!(score_record(&r, &mut FixedJitter(0)), 60);
    }

    #[test]
    fn score_is_clamped_to_100() {
        let r = record(&"t".repeat(100), &"d".repeat(500), "deadbeef");
        assert_eq!(score_record(&r, &mut FixedJitter(15)), 100);
    }

    #[test]
    fn random_jitter_stays_in_bounds() {
        let empty = record("x", "", "");
        let loaded = record(&"t".repeat(64), &"d".repeat(1 << 20), "deadbeef");
        let mut jitter = RandomJitter;
        for _ in 0..200 {
            let s = score_record(&empty, &mut jitter);
            assert!((40..=75).contains(&s));
            let s = score_record(&loaded, &mut jitter);
            assert!((90..=100).contains(&s));
        }
    }
}
