// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! End-to-end tests of the termination batcher against a scriptable
//! in-memory node.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cid::Cid;
use fil_actor_miner_state::v16::{DeadlineInfo, Method, TerminateSectorsParams};
use fil_actors_shared::fvm_ipld_bitfield::BitField;
use fil_actors_shared::v16::runtime::Policy;
use fvm_ipld_encoding::RawBytes;
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;
use fvm_shared::sector::{SectorID, SectorNumber};
use fvm_shared::MethodNum;
use pretty_assertions::assert_eq;
use tokio::time::timeout;

use forest_sealing::{
    AddressSelector, AddressUse, MinerFeeConfig, MinerInfo, Partition, SectorLocation,
    TerminateBatchConfig, TerminateBatcher, TerminateBatcherApi, TerminateOutcome, TipSetToken,
};

const MINER_ID: u64 = 1000;
const CURRENT_DEADLINE: u64 = 10;

/// A long enough interval that the periodic tick never fires within a test.
const NEVER: Duration = Duration::from_secs(3600);

fn deadline_info(index: u64) -> DeadlineInfo {
    DeadlineInfo {
        current_epoch: 0,
        period_start: 0,
        index,
        open: 0,
        close: 0,
        challenge: 0,
        fault_cutoff: 0,
        w_post_period_deadlines: 48,
        w_post_proving_period: 2880,
        w_post_challenge_window: 60,
        w_post_challenge_lookback: 20,
        fault_declaration_cutoff: 70,
    }
}

fn message_cid(seq: u64) -> Cid {
    let mh = cid::multihash::Multihash::wrap(0, &seq.to_be_bytes()).unwrap();
    Cid::new_v1(fvm_ipld_encoding::DAG_CBOR, mh)
}

fn empty_partition() -> Partition {
    Partition {
        all_sectors: BitField::new(),
        faulty_sectors: BitField::new(),
        recovering_sectors: BitField::new(),
        live_sectors: BitField::new(),
        active_sectors: BitField::new(),
    }
}

#[derive(Default)]
struct MockChain {
    deadline_index: u64,
    locations: HashMap<SectorNumber, SectorLocation>,
    partitions: HashMap<u64, Vec<Partition>>,
    sent: Vec<TerminateSectorsParams>,
    send_failures: u32,
    sends_attempted: u32,
    next_seq: u64,
}

#[derive(Default)]
struct MockApi {
    chain: Mutex<MockChain>,
}

impl MockApi {
    fn add_sector(&self, number: SectorNumber, loc: SectorLocation, live: bool) {
        let mut chain = self.chain.lock().unwrap();
        chain.locations.insert(number, loc);
        let parts = chain.partitions.entry(loc.deadline).or_default();
        while parts.len() <= loc.partition as usize {
            parts.push(empty_partition());
        }
        let part = &mut parts[loc.partition as usize];
        part.all_sectors.set(number);
        if live {
            part.live_sectors.set(number);
        }
    }

    fn kill_sector(&self, number: SectorNumber) {
        let mut chain = self.chain.lock().unwrap();
        let loc = chain.locations[&number];
        chain.partitions.get_mut(&loc.deadline).unwrap()[loc.partition as usize]
            .live_sectors
            .unset(number);
    }

    fn sent(&self) -> Vec<TerminateSectorsParams> {
        self.chain.lock().unwrap().sent.clone()
    }
}

#[async_trait]
impl TerminateBatcherApi for MockApi {
    async fn state_sector_partition(
        &self,
        _maddr: &Address,
        sector_number: SectorNumber,
        _tok: Option<TipSetToken>,
    ) -> anyhow::Result<Option<SectorLocation>> {
        Ok(self.chain.lock().unwrap().locations.get(&sector_number).copied())
    }

    async fn state_miner_info(
        &self,
        _maddr: &Address,
        _tok: Option<TipSetToken>,
    ) -> anyhow::Result<MinerInfo> {
        Ok(MinerInfo {
            owner: Address::new_id(100),
            worker: Address::new_id(101),
            control_addresses: vec![],
        })
    }

    async fn state_miner_proving_deadline(
        &self,
        _maddr: &Address,
        _tok: Option<TipSetToken>,
    ) -> anyhow::Result<DeadlineInfo> {
        Ok(deadline_info(self.chain.lock().unwrap().deadline_index))
    }

    async fn state_miner_partitions(
        &self,
        _maddr: &Address,
        dl_idx: u64,
        _tok: Option<TipSetToken>,
    ) -> anyhow::Result<Vec<Partition>> {
        Ok(self
            .chain
            .lock()
            .unwrap()
            .partitions
            .get(&dl_idx)
            .cloned()
            .unwrap_or_default())
    }

    async fn messager_send_msg(
        &self,
        _from: &Address,
        to: &Address,
        method: MethodNum,
        _value: TokenAmount,
        _max_fee: TokenAmount,
        params: RawBytes,
    ) -> anyhow::Result<Cid> {
        let mut chain = self.chain.lock().unwrap();
        chain.sends_attempted += 1;
        if chain.send_failures > 0 {
            chain.send_failures -= 1;
            anyhow::bail!("mempool rejected the message");
        }
        assert_eq!(*to, Address::new_id(MINER_ID));
        assert_eq!(method, Method::TerminateSectors as MethodNum);
        let params: TerminateSectorsParams = fvm_ipld_encoding::from_slice(params.bytes())?;
        chain.sent.push(params);
        chain.next_seq += 1;
        Ok(message_cid(chain.next_seq))
    }
}

struct StaticAddressSelector;

#[async_trait]
impl AddressSelector for StaticAddressSelector {
    async fn address_for(
        &self,
        _mi: &MinerInfo,
        purpose: AddressUse,
        good_funds: &TokenAmount,
        _min_funds: &TokenAmount,
    ) -> anyhow::Result<(Address, TokenAmount)> {
        assert_eq!(purpose, AddressUse::TerminateSectors);
        Ok((Address::new_id(101), good_funds.clone()))
    }
}

struct Harness {
    api: Arc<MockApi>,
    batcher: Arc<TerminateBatcher<MockApi>>,
}

fn setup(cfg: TerminateBatchConfig, policy: Policy) -> Harness {
    let api = Arc::new(MockApi::default());
    api.chain.lock().unwrap().deadline_index = CURRENT_DEADLINE;
    let batcher = TerminateBatcher::new(
        Address::new_id(MINER_ID),
        Arc::clone(&api),
        Arc::new(StaticAddressSelector),
        MinerFeeConfig {
            max_terminate_gas_fee: TokenAmount::from_whole(1),
        },
        cfg,
        Arc::new(policy),
    );
    Harness { api, batcher }
}

fn cfg(max: u64, min: u64, wait: Duration) -> TerminateBatchConfig {
    TerminateBatchConfig {
        terminate_batch_max: max,
        terminate_batch_min: min,
        terminate_batch_wait: wait,
    }
}

fn sector(number: SectorNumber) -> SectorID {
    SectorID {
        miner: MINER_ID,
        number,
    }
}

/// Spawn a registration and hand back the join handle.
fn register(
    h: &Harness,
    number: SectorNumber,
) -> tokio::task::JoinHandle<anyhow::Result<TerminateOutcome>> {
    let batcher = Arc::clone(&h.batcher);
    tokio::spawn(async move { batcher.add_termination(sector(number)).await })
}

async fn wait_for_pending(h: &Harness, n: usize) {
    for _ in 0..500 {
        if h.batcher.pending().await.unwrap().len() == n {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("never saw {n} pending registrations");
}

async fn wait_for_sends(h: &Harness, n: usize) {
    for _ in 0..500 {
        if h.api.sent().len() == n {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("never saw {n} submitted messages");
}

fn declared_sectors(params: &TerminateSectorsParams) -> Vec<u64> {
    let mut sectors: Vec<u64> = params
        .terminations
        .iter()
        .flat_map(|t| t.sectors.iter())
        .collect();
    sectors.sort_unstable();
    sectors
}

#[tokio::test]
async fn batches_on_size_pressure() {
    let h = setup(cfg(3, 1, NEVER), Policy::default());
    h.api.add_sector(1, SectorLocation { deadline: 20, partition: 0 }, true);
    h.api.add_sector(2, SectorLocation { deadline: 30, partition: 0 }, true);
    h.api.add_sector(3, SectorLocation { deadline: 40, partition: 0 }, true);

    let handles: Vec<_> = [1, 2, 3].into_iter().map(|n| register(&h, n)).collect();

    let mut cids = vec![];
    for handle in handles {
        match timeout(Duration::from_secs(10), handle).await.unwrap().unwrap().unwrap() {
            TerminateOutcome::Submitted(cid) => cids.push(cid),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
    // One message covers all three registrations.
    assert!(cids.windows(2).all(|w| w[0] == w[1]));
    assert!(h.batcher.pending().await.unwrap().is_empty());

    let sent = h.api.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(declared_sectors(&sent[0]), vec![1, 2, 3]);
}

#[tokio::test]
async fn flushes_on_timer_above_min() {
    let h = setup(cfg(100, 1, Duration::from_millis(50)), Policy::default());
    h.api.add_sector(7, SectorLocation { deadline: 20, partition: 0 }, true);

    let outcome = timeout(Duration::from_secs(2), h.batcher.add_termination(sector(7)))
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(outcome, TerminateOutcome::Submitted(_)));
    assert_eq!(h.api.sent().len(), 1);
}

#[tokio::test]
async fn force_flush_skips_challenged_deadlines() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    // Current proving deadline is 10: its own window and both neighbours are
    // off limits.
    h.api.add_sector(5, SectorLocation { deadline: CURRENT_DEADLINE, partition: 0 }, true);

    let handle = register(&h, 5);
    wait_for_pending(&h, 1).await;

    let flushed = h.batcher.flush().await.unwrap();
    assert_eq!(flushed, None);
    assert_eq!(h.batcher.pending().await.unwrap().len(), 1);
    assert!(h.api.sent().is_empty());

    handle.abort();
}

#[tokio::test]
async fn force_flush_takes_only_safe_deadlines() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    h.api.add_sector(4, SectorLocation { deadline: 9, partition: 0 }, true);
    h.api.add_sector(5, SectorLocation { deadline: 10, partition: 0 }, true);
    h.api.add_sector(6, SectorLocation { deadline: 11, partition: 0 }, true);
    h.api.add_sector(7, SectorLocation { deadline: 20, partition: 0 }, true);

    let held: Vec<_> = [4, 5, 6].into_iter().map(|n| register(&h, n)).collect();
    let safe = register(&h, 7);
    wait_for_pending(&h, 4).await;

    let flushed = h.batcher.flush().await.unwrap();
    assert!(flushed.is_some());

    let sent = h.api.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].terminations.len(), 1);
    assert_eq!(sent[0].terminations[0].deadline, 20);
    assert_eq!(declared_sectors(&sent[0]), vec![7]);

    match timeout(Duration::from_secs(2), safe).await.unwrap().unwrap().unwrap() {
        TerminateOutcome::Submitted(cid) => assert_eq!(Some(cid), flushed),
        other => panic!("unexpected outcome: {other:?}"),
    }

    // The challenged buckets are still enrolled for a later cycle.
    let pending: Vec<u64> = h
        .batcher
        .pending()
        .await
        .unwrap()
        .iter()
        .map(|s| s.number)
        .collect();
    assert_eq!(pending, vec![4, 5, 6]);

    for handle in held {
        handle.abort();
    }
}

#[tokio::test]
async fn splits_an_oversized_bucket_across_messages() {
    let policy = Policy {
        addressed_sectors_max: 100,
        ..Policy::default()
    };
    let h = setup(cfg(100, 1, NEVER), policy);
    let loc = SectorLocation { deadline: 20, partition: 0 };
    for n in 0..150 {
        h.api.add_sector(n, loc, true);
    }

    let handles: Vec<_> = (0..150).map(|n| register(&h, n)).collect();

    // The first message goes out on size pressure alone and is cut at the
    // per-message sector cap.
    wait_for_sends(&h, 1).await;
    wait_for_pending(&h, 50).await;

    let flushed = h.batcher.flush().await.unwrap();
    assert!(flushed.is_some());

    let sent = h.api.sent();
    assert_eq!(sent.len(), 2);
    let first = declared_sectors(&sent[0]);
    let second = declared_sectors(&sent[1]);
    assert_eq!(first.len(), 100);
    assert_eq!(second.len(), 50);
    let mut all = first.clone();
    all.extend(&second);
    all.sort_unstable();
    assert_eq!(all, (0..150).collect::<Vec<_>>());

    // Every waiter got the CID of exactly the message that carried its
    // sector.
    for (n, handle) in handles.into_iter().enumerate() {
        let expected = if first.contains(&(n as u64)) {
            message_cid(1)
        } else {
            message_cid(2)
        };
        match timeout(Duration::from_secs(10), handle).await.unwrap().unwrap().unwrap() {
            TerminateOutcome::Submitted(cid) => assert_eq!(cid, expected),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
    assert!(h.batcher.pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn already_dead_sector_short_circuits() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    h.api.add_sector(9, SectorLocation { deadline: 20, partition: 0 }, false);

    // Repeating the call must not enroll anything either.
    for _ in 0..2 {
        let outcome = h.batcher.add_termination(sector(9)).await.unwrap();
        assert_eq!(outcome, TerminateOutcome::AlreadyTerminated);
    }
    assert!(h.batcher.pending().await.unwrap().is_empty());
    assert!(h.api.sent().is_empty());
}

#[tokio::test]
async fn unknown_sector_is_an_error() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    let err = h.batcher.add_termination(sector(42)).await.unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn failed_send_keeps_registrations() {
    let h = setup(cfg(100, 1, Duration::from_millis(50)), Policy::default());
    h.api.chain.lock().unwrap().send_failures = 1;
    h.api.add_sector(3, SectorLocation { deadline: 20, partition: 0 }, true);

    let outcome = timeout(Duration::from_secs(3), h.batcher.add_termination(sector(3)))
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(outcome, TerminateOutcome::Submitted(_)));

    let chain = h.api.chain.lock().unwrap();
    assert_eq!(chain.sends_attempted, 2);
    assert_eq!(chain.sent.len(), 1);
}

#[tokio::test]
async fn duplicate_registrations_share_one_message() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    h.api.add_sector(8, SectorLocation { deadline: 20, partition: 0 }, true);

    let first = register(&h, 8);
    let second = register(&h, 8);
    wait_for_pending(&h, 1).await;
    // The pending set cannot tell two waiters on one sector apart; give the
    // second registration a moment to attach before flushing.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let flushed = h.batcher.flush().await.unwrap();
    assert!(flushed.is_some());

    let a = timeout(Duration::from_secs(2), first).await.unwrap().unwrap().unwrap();
    let b = timeout(Duration::from_secs(2), second).await.unwrap().unwrap().unwrap();
    assert_eq!(a, b);
    assert!(matches!(a, TerminateOutcome::Submitted(_)));

    let sent = h.api.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(declared_sectors(&sent[0]), vec![8]);
}

#[tokio::test]
async fn drops_sectors_no_longer_live_at_submission() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    let loc = SectorLocation { deadline: 20, partition: 0 };
    h.api.add_sector(1, loc, true);
    h.api.add_sector(2, loc, true);

    let live = register(&h, 1);
    let dead = register(&h, 2);
    wait_for_pending(&h, 2).await;

    // Sector 2 gets terminated behind our back before the flush.
    h.api.kill_sector(2);

    let flushed = h.batcher.flush().await.unwrap();
    assert!(flushed.is_some());
    let sent = h.api.sent();
    assert_eq!(declared_sectors(&sent[0]), vec![1]);

    match timeout(Duration::from_secs(2), live).await.unwrap().unwrap().unwrap() {
        TerminateOutcome::Submitted(cid) => assert_eq!(Some(cid), flushed),
        other => panic!("unexpected outcome: {other:?}"),
    }

    // The stale registration is gone from the pending set; its waiter is
    // abandoned.
    assert!(h.batcher.pending().await.unwrap().is_empty());
    dead.abort();
}

#[tokio::test]
async fn caps_partition_declarations_per_message() {
    let policy = Policy {
        declarations_max: 2,
        ..Policy::default()
    };
    let h = setup(cfg(100, 1, NEVER), policy);
    h.api.add_sector(1, SectorLocation { deadline: 20, partition: 0 }, true);
    h.api.add_sector(2, SectorLocation { deadline: 30, partition: 0 }, true);
    h.api.add_sector(3, SectorLocation { deadline: 40, partition: 0 }, true);

    let handles: Vec<_> = [1, 2, 3].into_iter().map(|n| register(&h, n)).collect();
    wait_for_pending(&h, 3).await;

    let first = h.batcher.flush().await.unwrap();
    assert!(first.is_some());
    assert_eq!(h.api.sent()[0].terminations.len(), 2);
    assert_eq!(h.batcher.pending().await.unwrap().len(), 1);

    let second = h.batcher.flush().await.unwrap();
    assert!(second.is_some());
    let sent = h.api.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].terminations.len(), 1);
    assert!(h.batcher.pending().await.unwrap().is_empty());

    for handle in handles {
        let outcome = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap().unwrap();
        assert!(matches!(outcome, TerminateOutcome::Submitted(_)));
    }
}

#[tokio::test]
async fn pending_lists_sorted_sector_ids() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    h.api.add_sector(9, SectorLocation { deadline: 20, partition: 0 }, true);
    h.api.add_sector(1, SectorLocation { deadline: 30, partition: 0 }, true);
    h.api.add_sector(5, SectorLocation { deadline: 40, partition: 1 }, true);

    let handles: Vec<_> = [9, 1, 5].into_iter().map(|n| register(&h, n)).collect();
    wait_for_pending(&h, 3).await;

    let pending: Vec<(u64, u64)> = h
        .batcher
        .pending()
        .await
        .unwrap()
        .iter()
        .map(|s| (s.miner, s.number))
        .collect();
    assert_eq!(pending, vec![(MINER_ID, 1), (MINER_ID, 5), (MINER_ID, 9)]);

    for handle in handles {
        handle.abort();
    }
}

#[tokio::test]
async fn stop_terminates_the_worker() {
    let h = setup(cfg(100, 1, NEVER), Policy::default());
    timeout(Duration::from_secs(2), h.batcher.stop()).await.unwrap();
    assert!(h.batcher.flush().await.is_err());
}
