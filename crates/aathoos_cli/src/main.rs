//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `aathoos_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("aathoos_core ping={}", aathoos_core::ping());
    println!("aathoos_core version={}", aathoos_core::core_version());
}
