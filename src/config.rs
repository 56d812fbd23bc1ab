//! Application configuration constants.
//!
//! Central place for every tunable that would otherwise be scattered as a
//! magic number. The bind address is the only value read from outside the
//! binary; everything else is a constant.

use serde::Deserialize;

// ==================== Server Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    server: Option<ServerConfig>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    bind: Option<String>,
}

/// Default address and port
pub const SERVER_ADDR: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 3000;

/// Load the bind address with priority: config.toml > .env > default
pub fn load_bind_addr() -> String {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(server) = config.server {
                if let Some(bind) = server.bind {
                    tracing::info!("Using bind address from config.toml: {}", bind);
                    return bind;
                }
            }
        }
    }

    // Priority 2: .env BIND_ADDR
    if let Ok(bind) = std::env::var("BIND_ADDR") {
        tracing::info!("Using bind address from BIND_ADDR env: {}", bind);
        return bind;
    }

    // Default
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Session Configuration ====================

/// Session expiration time in hours (1 week)
pub const SESSION_DURATION_HOURS: i64 = 24 * 7;

/// Probability threshold for expired-session cleanup (0-255, lower = more
/// frequent). Value of 25 means ~10% chance (25/256) on each session lookup.
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

// ==================== Simulated Latency ====================

// All backend "work" in this app is mocked; these delays make the mock feel
// like a network round trip.

/// Login / registration round trip
pub const AUTH_LATENCY_MS: u64 = 1000;

/// Dashboard metrics fetch
pub const METRICS_LATENCY_MS: u64 = 1000;

/// Question set fetch
pub const PROVIDER_LATENCY_MS: u64 = 600;

/// Uploaded document "processing" time
pub const UPLOAD_PROCESSING_MS: u64 = 2000;

// ==================== Quiz Configuration ====================

pub const MIN_QUESTION_COUNT: usize = 1;
pub const MAX_QUESTION_COUNT: usize = 50;
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Number of weak topics surfaced on the practice configuration view
pub const WEAK_TOPIC_LIMIT: usize = 3;

/// Clamp a requested question count into the supported range.
/// Form handlers call this before the value reaches the quiz session.
pub fn clamp_question_count(count: usize) -> usize {
    count.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT)
}
