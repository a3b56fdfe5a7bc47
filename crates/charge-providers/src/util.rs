//! # Shared Provider Utilities
//!
//! Cross-cutting helpers used by every simulated backend: the latency
//! suspension, transaction-id generation, and the success-draw source.
//! None of these carry per-variant state.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Suspend for the simulated network round-trip.
///
/// This is the only suspension point in a charge attempt; concurrent
/// attempts overlap their latencies here instead of serializing.
pub async fn simulate_delay(latency: Duration) {
    tokio::time::sleep(latency).await;
}

const TOKEN_LEN: usize = 9;
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Build a transaction id of the form `<prefix>-<epoch-millis>-<token>`.
///
/// Uniqueness is probabilistic (timestamp plus a 9-character base36
/// token), which is plenty for simulated charges.
pub fn transaction_id(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}-{}-{}", prefix, millis, random_token())
}

fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Source of the success draw for a simulated charge.
///
/// Production providers use the process-wide thread-local generator.
/// Tests can substitute a seeded generator for reproducible sequences,
/// or pin the sample outright to force one outcome branch.
#[derive(Clone, Default)]
pub enum DrawSource {
    /// Thread-local generator (production default)
    #[default]
    ThreadLocal,
    /// Seeded generator, shared across clones
    Seeded(Arc<Mutex<StdRng>>),
    /// Constant sample in [0, 1)
    Fixed(f64),
}

impl DrawSource {
    /// Seeded source for reproducible tests
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    /// Constant source that always yields `sample`
    pub fn fixed(sample: f64) -> Self {
        Self::Fixed(sample)
    }

    /// Draw one uniform sample from [0, 1)
    pub fn sample(&self) -> f64 {
        match self {
            DrawSource::ThreadLocal => rand::thread_rng().gen(),
            DrawSource::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                rng.gen()
            }
            DrawSource::Fixed(sample) => *sample,
        }
    }
}
