// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Operator-facing configuration for the sealing services.

use std::time::Duration;

use fvm_shared::econ::TokenAmount;
use serde::{Deserialize, Serialize};

/// Fee ceilings for messages sent on the miner's behalf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MinerFeeConfig {
    /// Ceiling on the gas fee of a `TerminateSectors` message. Also the
    /// funding level requested from the address selector.
    pub max_terminate_gas_fee: TokenAmount,
}

/// Thresholds steering when a pending termination batch is flushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TerminateBatchConfig {
    /// Flush as soon as at least this many sectors are pending. Adjust based
    /// on real-world gas numbers; the actors cap a single message far higher.
    pub terminate_batch_max: u64,
    /// On the periodic tick, flush only if at least this many sectors are
    /// pending.
    pub terminate_batch_min: u64,
    /// Interval of the periodic tick.
    #[serde(with = "humantime_serde")]
    pub terminate_batch_wait: Duration,
}

impl Default for TerminateBatchConfig {
    fn default() -> Self {
        Self {
            terminate_batch_max: 100,
            terminate_batch_min: 1,
            terminate_batch_wait: Duration::from_secs(5 * 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_config_defaults() {
        let cfg = TerminateBatchConfig::default();
        assert_eq!(cfg.terminate_batch_max, 100);
        assert_eq!(cfg.terminate_batch_min, 1);
        assert_eq!(cfg.terminate_batch_wait, Duration::from_secs(300));
    }

    #[test]
    fn batch_config_from_partial_toml_shaped_json() {
        // Operators usually override a single knob; the rest must fall back
        // to the defaults.
        let cfg: TerminateBatchConfig =
            serde_json::from_str(r#"{"TerminateBatchWait": "50ms"}"#).unwrap();
        assert_eq!(cfg.terminate_batch_max, 100);
        assert_eq!(cfg.terminate_batch_wait, Duration::from_millis(50));
    }
}
