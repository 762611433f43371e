//! poolsim_stats — per-miner statistics over pool-simulation results.
//!
//! Reads one simulation-results document (JSON, optionally gzipped) and
//! reduces it to a single miner's aggregate record. Read-only; nothing
//! survives an invocation.

pub mod aggregate;
pub mod results;

pub use aggregate::{aggregate_miner, AggregateError, MinerStats};
pub use results::load::{load_results, LoadError};
pub use results::{MinerRecord, PoolMinerRecord, PoolMinerStats, PoolRecord, ResultsDocument};
