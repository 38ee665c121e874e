// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Chain-facing data types shared by the sealing services and the node
//! adapters that back them.

use cid::Cid;
use fil_actors_shared::fvm_ipld_bitfield::BitField;
use fvm_shared::address::Address;
use serde::{Deserialize, Serialize};

/// Opaque handle pinning a chain-view query to a tipset. `None` queries the
/// current head, which is what the sealing services do throughout.
pub type TipSetToken = Vec<u8>;

/// Where a sector currently sits in the proving schedule. This is the key
/// termination requests are grouped under: all sectors sharing a location can
/// be retired by a single declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectorLocation {
    pub deadline: u64,
    pub partition: u64,
}

/// Per-partition sector bitfields as reported by miner state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Partition {
    pub all_sectors: BitField,
    pub faulty_sectors: BitField,
    pub recovering_sectors: BitField,
    /// Sectors that are neither terminated nor expired. Only live sectors may
    /// be terminated.
    pub live_sectors: BitField,
    pub active_sectors: BitField,
}

/// The subset of on-chain miner info that message sending needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MinerInfo {
    pub owner: Address,
    pub worker: Address,
    // Must all be ID addresses.
    pub control_addresses: Vec<Address>,
}

/// Outcome of registering a sector for termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminateOutcome {
    /// The batched `TerminateSectors` message carrying this sector was
    /// accepted by the mempool.
    Submitted(Cid),
    /// The sector is no longer live on chain; there is nothing to retire.
    AlreadyTerminated,
}
