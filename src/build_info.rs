//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Crate version as declared in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version banner for `--version`.
pub fn version_string() -> String {
    format!("dino {} ({} {})", VERSION, BUILD_COMMIT, BUILD_DATE)
}
