//! Single-miner aggregation: cross-pool sums and derived ratios.

use crate::aggregate::num::Sum;
use crate::results::{PoolMinerRecord, ResultsDocument};
use serde::Serialize;
use serde_json::Number;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    #[error("miner {address} does not exist")]
    MinerNotFound { address: String },
    #[error("miner not in any pool")]
    NotInAnyPool,
    #[error("division by zero: {denominator} is zero")]
    DivisionByZero { denominator: &'static str },
}

/// Aggregate record for one miner. Field order is the output key order.
#[derive(Clone, Debug, Serialize)]
pub struct MinerStats {
    pub blocks_mined: Number,
    pub blocks_received: Number,
    pub blocks_ratio: f64,
    pub work_per_block: f64,
}

/// Compute one miner's aggregate statistics from a decoded document.
///
/// The first matching record in `miners` supplies `total_work`; every
/// matching entry across every pool contributes to the block sums (a
/// miner may legitimately appear in more than one pool).
pub fn aggregate_miner(
    document: &ResultsDocument,
    address: &str,
) -> Result<MinerStats, AggregateError> {
    let miner = document
        .miners
        .iter()
        .find(|m| m.address == address)
        .ok_or_else(|| AggregateError::MinerNotFound {
            address: address.to_string(),
        })?;

    let pool_entries: Vec<&PoolMinerRecord> = document
        .pools
        .iter()
        .flat_map(|pool| pool.miners.iter())
        .filter(|m| m.address == address)
        .collect();
    if pool_entries.is_empty() {
        return Err(AggregateError::NotInAnyPool);
    }

    let blocks_received = pool_entries
        .iter()
        .fold(Sum::ZERO, |acc, m| acc + &m.metadata.blocks_received);
    let blocks_mined = pool_entries
        .iter()
        .fold(Sum::ZERO, |acc, m| acc + &m.metadata.blocks_mined);

    if blocks_mined.as_f64() == 0.0 {
        return Err(AggregateError::DivisionByZero {
            denominator: "blocks_mined",
        });
    }
    if blocks_received.as_f64() == 0.0 {
        return Err(AggregateError::DivisionByZero {
            denominator: "blocks_received",
        });
    }

    Ok(MinerStats {
        blocks_mined: blocks_mined.to_number(),
        blocks_received: blocks_received.to_number(),
        blocks_ratio: blocks_received.as_f64() / blocks_mined.as_f64(),
        work_per_block: miner.total_work / blocks_received.as_f64(),
    })
}
