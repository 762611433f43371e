//! Decoded shape of a simulation-results document.

pub mod load;

use serde::Deserialize;
use serde_json::Number;

/// Top-level results document. Fields beyond `miners` and `pools`
/// (difficulty, reward scheme, block events, ...) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ResultsDocument {
    pub miners: Vec<MinerRecord>,
    pub pools: Vec<PoolRecord>,
}

/// Network-level record for one miner. Addresses are unique in practice
/// but uniqueness is not enforced; lookups take the first match.
#[derive(Clone, Debug, Deserialize)]
pub struct MinerRecord {
    pub address: String,
    pub total_work: f64,
}

/// One pool's slice of the document. Only the per-miner entries matter
/// here; pool-level metadata is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct PoolRecord {
    pub miners: Vec<PoolMinerRecord>,
}

/// A miner's membership entry within a single pool.
#[derive(Clone, Debug, Deserialize)]
pub struct PoolMinerRecord {
    pub address: String,
    pub metadata: PoolMinerStats,
}

/// Pool-local block counters. `blocks_mined` is integral in simulator
/// output, while `blocks_received` is fractional under proportional
/// reward schemes; both are kept as raw JSON numbers so sums preserve
/// the source representation.
#[derive(Clone, Debug, Deserialize)]
pub struct PoolMinerStats {
    pub blocks_received: Number,
    pub blocks_mined: Number,
}
