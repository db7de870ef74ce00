//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use montepi_engine::Mt19937;

use crate::Result;

pub mod confidence;
pub mod precision;
pub mod sweep;

/// Key array used when no scalar seed is given.
const DEFAULT_SEED_KEYS: [u32; 4] = [0x123, 0x234, 0x345, 0x456];

/// Builds the generator shared by a command invocation.
pub(crate) fn build_generator(seed: Option<u32>) -> Result<Mt19937> {
    match seed {
        Some(seed) => Ok(Mt19937::from_seed(seed)),
        None => Ok(Mt19937::from_key_array(&DEFAULT_SEED_KEYS)?),
    }
}
