//! Build identification captured by build.rs

/// Git commit hash (short form), or "unknown" outside a checkout
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Build timestamp (RFC 3339, UTC)
pub const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

/// Cargo profile the binary was built with
pub const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

/// Text shown by `tcm --version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " [",
    env!("GIT_HASH"),
    "] built ",
    env!("BUILD_TIMESTAMP"),
    " (",
    env!("BUILD_PROFILE"),
    ")"
);
