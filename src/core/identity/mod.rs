//! Prefixed identifiers for canonical entities.
//!
//! Every identifier has the shape `{prefix}_{suffix}` where the suffix is
//! [`SUFFIX_LEN`] lowercase hex characters. Sources hold no registry and never
//! check for collisions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Number of hex characters in an identifier suffix.
pub const SUFFIX_LEN: usize = 8;

pub const PATTERN_PREFIX: &str = "pattern";
pub const AGENT_PREFIX: &str = "agent";
pub const TASK_PREFIX: &str = "task";
pub const TOOL_PREFIX: &str = "tool";
pub const RESOURCE_PREFIX: &str = "resource";

/// Source of identifier suffixes.
pub trait IdSource: Send + Sync {
    /// Produce a fresh suffix of [`SUFFIX_LEN`] lowercase hex characters.
    fn suffix(&self) -> String;

    fn make_id(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.suffix())
    }
}

/// Random suffixes taken from a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn suffix(&self) -> String {
        let mut simple = uuid::Uuid::new_v4().simple().to_string();
        simple.truncate(SUFFIX_LEN);
        simple
    }
}

/// Reproducible suffixes drawn from a seeded RNG.
#[derive(Debug)]
pub struct SeededIdSource {
    rng: Mutex<StdRng>,
}

impl SeededIdSource {
    pub fn new(seed: u64) -> Self {
        SeededIdSource {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IdSource for SeededIdSource {
    fn suffix(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        format!("{:08x}", rng.gen::<u32>())
    }
}

/// Counting suffixes (`00000001`, `00000002`, ...), mainly for tests.
#[derive(Debug)]
pub struct SequentialIdSource {
    next: AtomicU64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        SequentialIdSource {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIdSource {
    fn suffix(&self) -> String {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{:08x}", value & 0xffff_ffff)
    }
}

/// Returns `true` when `id` is `{prefix}_` followed by a well-formed suffix.
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .map(|suffix| {
            suffix.len() == SUFFIX_LEN
                && suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
        .unwrap_or(false)
}
