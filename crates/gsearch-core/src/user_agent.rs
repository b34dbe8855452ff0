//! User-Agent rotation
//!
//! Each request picks a browser signature at random from a fixed pool.
//! The randomness is behind [`IndexPicker`] so tests can replay a
//! deterministic sequence.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SearchError};

/// Realistic desktop browser signatures
pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:56.0) Gecko/20100101 Firefox/56.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13) AppleWebKit/604.1.38 (KHTML, like Gecko) Version/11.0 Safari/604.1.38",
];

/// Source of random indices into the agent pool
pub trait IndexPicker: Send + Sync {
    /// Returns an index in `0..len`; `len` is never 0
    fn pick(&self, len: usize) -> usize;
}

/// Process-wide generator seeded once from OS entropy
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed seed, for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SeededPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping around at the end
pub struct SequencePicker {
    indices: Vec<usize>,
    position: AtomicUsize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: AtomicUsize::new(0),
        }
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let position = self.position.fetch_add(1, Ordering::Relaxed);
        self.indices[position % self.indices.len()] % len
    }
}

/// Pool of User-Agent strings with a random picker
pub struct UserAgentPool {
    agents: Vec<String>,
    picker: Box<dyn IndexPicker>,
}

impl UserAgentPool {
    /// Create a pool from agents and a picker
    ///
    /// # Errors
    /// `ConfigUnavailable` if `agents` is empty
    pub fn new(agents: Vec<String>, picker: Box<dyn IndexPicker>) -> Result<Self> {
        if agents.is_empty() {
            return Err(SearchError::ConfigUnavailable(
                "User-Agent pool cannot be empty".to_string(),
            ));
        }
        Ok(Self { agents, picker })
    }

    /// Pick the agent for the next request
    pub fn pick(&self) -> &str {
        &self.agents[self.picker.pick(self.agents.len())]
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self {
            agents: DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
            picker: Box::new(SeededPicker::new()),
        }
    }
}

impl std::fmt::Debug for UserAgentPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAgentPool")
            .field("agents", &self.agents.len())
            .finish_non_exhaustive()
    }
}
