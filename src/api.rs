// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Trait seams between the sealing services and the node they are embedded
//! in: a read-only view of chain state, a message submitter, and control
//! address selection.

use async_trait::async_trait;
use cid::Cid;
use fil_actor_miner_state::v16::DeadlineInfo;
use fvm_ipld_encoding::RawBytes;
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;
use fvm_shared::sector::SectorNumber;
use fvm_shared::MethodNum;

use crate::types::{MinerInfo, Partition, SectorLocation, TipSetToken};

/// Everything the termination batcher needs from the node. The chain-view
/// queries are read-only and idempotent; `messager_send_msg` hands a fully
/// serialized message to the mempool and returns its CID as soon as it is
/// accepted, without waiting for on-chain inclusion.
#[async_trait]
pub trait TerminateBatcherApi: Send + Sync + 'static {
    /// Resolve a sector to its (deadline, partition) location. Returns
    /// `None` iff the sector does not exist on chain.
    async fn state_sector_partition(
        &self,
        maddr: &Address,
        sector_number: SectorNumber,
        tok: Option<TipSetToken>,
    ) -> anyhow::Result<Option<SectorLocation>>;

    async fn state_miner_info(
        &self,
        maddr: &Address,
        tok: Option<TipSetToken>,
    ) -> anyhow::Result<MinerInfo>;

    /// Deadline calculations for the miner's current proving window.
    async fn state_miner_proving_deadline(
        &self,
        maddr: &Address,
        tok: Option<TipSetToken>,
    ) -> anyhow::Result<DeadlineInfo>;

    /// All partitions in the given deadline, in partition-index order.
    async fn state_miner_partitions(
        &self,
        maddr: &Address,
        dl_idx: u64,
        tok: Option<TipSetToken>,
    ) -> anyhow::Result<Vec<Partition>>;

    async fn messager_send_msg(
        &self,
        from: &Address,
        to: &Address,
        method: MethodNum,
        value: TokenAmount,
        max_fee: TokenAmount,
        params: RawBytes,
    ) -> anyhow::Result<Cid>;
}

/// What a control address is being picked for. Different message classes may
/// be funded from different wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressUse {
    PreCommit,
    Commit,
    TerminateSectors,
    PoSt,
}

/// Picks the from-address for a message, preferring one able to cover
/// `good_funds` and falling back to one covering at least `min_funds`.
/// Returns the chosen address together with the funds available on it.
#[async_trait]
pub trait AddressSelector: Send + Sync {
    async fn address_for(
        &self,
        mi: &MinerInfo,
        purpose: AddressUse,
        good_funds: &TokenAmount,
        min_funds: &TokenAmount,
    ) -> anyhow::Result<(Address, TokenAmount)>;
}
