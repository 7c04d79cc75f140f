/// The current version of common-greet, sourced from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod greeting;

pub use greeting::{greet, DEFAULT_NAME};
