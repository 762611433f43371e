//! Reduction of a results document to one miner's aggregate record.

mod miner_stats;
mod num;

pub use miner_stats::{aggregate_miner, AggregateError, MinerStats};
