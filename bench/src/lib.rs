//! SQLite storage benchmark for country sets
//!
//! Compares two ways of persisting a set of countries in a single column:
//! - **JSON schema**: the set as a JSON array of codes in a TEXT column
//! - **Bitset schema**: the set as a fixed 32-byte BLOB (see `countryset-core`)
//!
//! Run the comparison: `cargo run --release`
//! Run micro-benchmarks: `cargo bench`
//! Run tests: `cargo test`

pub mod config;
pub mod populate;
pub mod report;
pub mod runner;
pub mod schema;
pub mod timer;
