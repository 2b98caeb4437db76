//! ID generation utilities for Toolshelf
//!
//! Records created locally (newsletter subscriptions, imported tools without
//! an id) need identifiers that stay stable once written.

use std::sync::atomic::{AtomicU64, Ordering};

use sha2::{Digest, Sha256};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Generate a record ID from a seed string
///
/// Format: `{prefix}-{timestamp_ms}-{hash8}` where `hash8` is the first
/// eight hex digits of `sha256(seed || timestamp || sequence)`. The
/// process-wide sequence keeps ids distinct within one millisecond.
/// Example: `sub-1738300800123-9f2c01ab`
pub fn generate_id(prefix: &str, seed: &str) -> String {
    let timestamp = now_ms();
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, timestamp, short_hash(seed, timestamp, sequence))
}

fn short_hash(seed: &str, timestamp: u64, sequence: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(timestamp.to_be_bytes());
    hasher.update(sequence.to_be_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..4])
}

/// Generate a newsletter subscription ID
pub fn generate_subscription_id(email: &str) -> String {
    generate_id("sub", email)
}

/// Generate a tool ID for records imported without one
pub fn generate_tool_id(name: &str) -> String {
    generate_id("tool", name)
}
