// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Batching of sector terminations into `TerminateSectors` messages.
//!
//! Retiring sectors one message per sector is ruinously expensive in gas, so
//! termination requests are parked here and flushed as a single message once
//! enough of them accumulate, a timer expires, or an operator forces it. A
//! single message may retire sectors across many (deadline, partition)
//! buckets; every registered caller gets the CID of the message that carried
//! its sector.
//!
//! The actors forbid terminating a sector while its proving window is being
//! challenged, so buckets in the current deadline or the two adjacent ones
//! are held back and picked up again on a later cycle.

use std::cmp;
use std::sync::Arc;

use ahash::{HashMap, HashMapExt};
use anyhow::{anyhow, Context as _};
use cid::Cid;
use fil_actor_miner_state::v16::{Method, TerminateSectorsParams, TerminationDeclaration};
use fil_actors_shared::fvm_ipld_bitfield::BitField;
use fil_actors_shared::v16::runtime::Policy;
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;
use fvm_shared::sector::{SectorID, SectorNumber};
use fvm_shared::MethodNum;
use num_traits::Zero;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::api::{AddressSelector, AddressUse, TerminateBatcherApi};
use crate::config::{MinerFeeConfig, TerminateBatchConfig};
use crate::types::{SectorLocation, TerminateOutcome};

/// Sectors enrolled for termination and the callers waiting on them.
/// Guarded by a single lock so that batch selection never races a
/// registration.
struct PendingState {
    /// Pending sector numbers, grouped by their on-chain location.
    todo: HashMap<SectorLocation, BitField>,
    /// Reply channels per enrolled sector number. Every sender has capacity
    /// one and is used at most once; a receiver whose caller has gone away
    /// just swallows the CID.
    waiting: HashMap<SectorNumber, Vec<flume::Sender<Cid>>>,
}

/// Accumulates termination requests and flushes them as batched on-chain
/// messages.
///
/// The batcher spawns its worker task at construction and runs until
/// [`TerminateBatcher::stop`]. Registrations, pending-set queries and forced
/// flushes are all safe to call concurrently from any number of tasks.
pub struct TerminateBatcher<A> {
    api: Arc<A>,
    maddr: Address,
    addr_sel: Arc<dyn AddressSelector>,
    fee_cfg: MinerFeeConfig,
    cfg: TerminateBatchConfig,
    policy: Arc<Policy>,

    state: Mutex<PendingState>,

    /// Coalescing wakeup: holds at most one pending signal no matter how many
    /// registrations arrive between two worker iterations.
    notify: flume::Sender<()>,
    /// Rendezvous carrying the reply channel of a forced flush.
    force: flume::Sender<flume::Sender<Option<Cid>>>,
    stop: flume::Sender<()>,
    /// Disconnects when the worker task has exited.
    stopped: flume::Receiver<()>,
}

impl<A: TerminateBatcherApi> TerminateBatcher<A> {
    pub fn new(
        maddr: Address,
        api: Arc<A>,
        addr_sel: Arc<dyn AddressSelector>,
        fee_cfg: MinerFeeConfig,
        cfg: TerminateBatchConfig,
        policy: Arc<Policy>,
    ) -> Arc<Self> {
        let (notify_tx, notify_rx) = flume::bounded(1);
        let (force_tx, force_rx) = flume::bounded(0);
        let (stop_tx, stop_rx) = flume::bounded(1);
        let (stopped_tx, stopped_rx) = flume::bounded(1);

        let batcher = Arc::new(Self {
            api,
            maddr,
            addr_sel,
            fee_cfg,
            cfg,
            policy,
            state: Mutex::new(PendingState {
                todo: HashMap::new(),
                waiting: HashMap::new(),
            }),
            notify: notify_tx,
            force: force_tx,
            stop: stop_tx,
            stopped: stopped_rx,
        });

        tokio::task::spawn({
            let batcher = Arc::clone(&batcher);
            async move { batcher.run(notify_rx, force_rx, stop_rx, stopped_tx).await }
        });

        batcher
    }

    /// Register a sector for termination and wait for the batch message
    /// carrying it.
    ///
    /// Returns [`TerminateOutcome::AlreadyTerminated`] without enrolling
    /// anything if chain state no longer lists the sector as live. Dropping
    /// the returned future abandons only the wait: the sector stays enrolled
    /// and goes out with a later batch.
    pub async fn add_termination(&self, sector: SectorID) -> anyhow::Result<TerminateOutcome> {
        let maddr = Address::new_id(sector.miner);

        let loc = self
            .api
            .state_sector_partition(&maddr, sector.number, None)
            .await
            .context("getting sector location")?
            .ok_or_else(|| anyhow!("sector {} not found in any partition", sector.number))?;

        let parts = self
            .api
            .state_miner_partitions(&maddr, loc.deadline, None)
            .await
            .context("getting partitions")?;
        let live = parts
            .get(loc.partition as usize)
            .with_context(|| {
                format!(
                    "partition {} not found in deadline {}",
                    loc.partition, loc.deadline
                )
            })?
            .live_sectors
            .get(sector.number);
        if !live {
            return Ok(TerminateOutcome::AlreadyTerminated);
        }

        let (sent_tx, sent_rx) = flume::bounded(1);
        {
            let mut state = self.state.lock().await;
            state.todo.entry(loc).or_default().set(sector.number);
            state.waiting.entry(sector.number).or_default().push(sent_tx);

            // A wakeup already in flight covers this registration too.
            let _ = self.notify.try_send(());
        }

        let message_cid = sent_rx
            .recv_async()
            .await
            .map_err(|_| anyhow!("termination batcher stopped"))?;
        Ok(TerminateOutcome::Submitted(message_cid))
    }

    /// Force a flush of whatever is currently eligible, regardless of the
    /// batch thresholds. Returns the CID of the submitted message, or `None`
    /// if nothing was eligible.
    pub async fn flush(&self) -> anyhow::Result<Option<Cid>> {
        let (reply_tx, reply_rx) = flume::bounded(1);
        self.force
            .send_async(reply_tx)
            .await
            .map_err(|_| anyhow!("termination batcher stopped"))?;
        reply_rx
            .recv_async()
            .await
            .map_err(|_| anyhow!("termination batcher stopped"))
    }

    /// All sectors currently enrolled, sorted by miner then sector number.
    pub async fn pending(&self) -> anyhow::Result<Vec<SectorID>> {
        let state = self.state.lock().await;

        let miner = self.maddr.id().context("expected an ID miner address")?;
        let mut sectors: Vec<SectorID> = state
            .todo
            .values()
            .flat_map(|bf| bf.iter())
            .map(|number| SectorID { miner, number })
            .collect();
        sectors.sort_unstable_by_key(|s| (s.miner, s.number));
        Ok(sectors)
    }

    /// Shut the worker task down and wait for it to exit. Pending
    /// registrations are not drained; their waiters never resolve.
    pub async fn stop(&self) {
        let _ = self.stop.try_send(());
        let _ = self.stopped.recv_async().await;
    }

    async fn run(
        &self,
        notify: flume::Receiver<()>,
        force: flume::Receiver<flume::Sender<Option<Cid>>>,
        stop: flume::Receiver<()>,
        stopped: flume::Sender<()>,
    ) {
        // Held until the top of the iteration after the force fired, so the
        // caller sees the id of exactly the batch its request triggered.
        let mut force_reply: Option<flume::Sender<Option<Cid>>> = None;
        let mut last_msg: Option<Cid> = None;

        loop {
            if let Some(reply) = force_reply.take() {
                let _ = reply.try_send(last_msg);
            }
            last_msg = None;

            let mut send_above_max = false;
            let mut send_above_min = false;
            tokio::select! {
                _ = stop.recv_async() => break,
                res = notify.recv_async() => match res {
                    Ok(()) => send_above_max = true,
                    // All handles dropped without stop(); nothing can ever
                    // register again.
                    Err(_) => break,
                },
                _ = tokio::time::sleep(self.cfg.terminate_batch_wait) => send_above_min = true,
                res = force.recv_async() => match res {
                    Ok(reply) => force_reply = Some(reply),
                    Err(_) => break,
                },
            }

            match self.process_batch(send_above_max, send_above_min).await {
                Ok(mcid) => last_msg = mcid,
                Err(e) => warn!("failed to process termination batch: {e:#}"),
            }
        }

        drop(stopped);
    }

    /// Select an eligible subset of the pending set, submit it as one
    /// message, and fan the message CID out to the waiters it covered.
    ///
    /// `notif` marks a wakeup caused by a new registration (flush only at the
    /// high-water mark), `after` a periodic tick (flush above the floor). A
    /// forced flush sets neither and submits any non-empty selection.
    ///
    /// The pending set is only mutated after the message is accepted; any
    /// failure before that leaves every registration in place for the next
    /// cycle.
    async fn process_batch(&self, notif: bool, after: bool) -> anyhow::Result<Option<Cid>> {
        let deadline = self
            .api
            .state_miner_proving_deadline(&self.maddr, None)
            .await
            .context("getting proving deadline info failed")?;
        let period_deadlines = self.policy.wpost_period_deadlines;

        let mut state = self.state.lock().await;

        let mut terminations: Vec<TerminationDeclaration> = Vec::new();
        // Location whose bucket was cut down to fit the per-message sector
        // cap; at most one per batch, and the only one whose leftover bits
        // must survive the post-submit cleanup.
        let mut partial: Option<SectorLocation> = None;
        let mut total: u64 = 0;

        for (&loc, sectors) in state.todo.iter() {
            if challenge_adjacent(loc.deadline, deadline.index, period_deadlines) {
                continue;
            }

            let mut count = sectors.len();
            if count == 0 {
                warn!(
                    deadline = loc.deadline,
                    partition = loc.partition,
                    "zero sectors in termination bucket"
                );
                continue;
            }

            let parts = match self
                .api
                .state_miner_partitions(&self.maddr, loc.deadline, None)
                .await
            {
                Ok(parts) => parts,
                Err(e) => {
                    warn!(
                        deadline = loc.deadline,
                        partition = loc.partition,
                        "getting miner partitions: {e:#}"
                    );
                    continue;
                }
            };
            let Some(partition) = parts.get(loc.partition as usize) else {
                warn!(
                    deadline = loc.deadline,
                    partition = loc.partition,
                    "partition not present in deadline"
                );
                continue;
            };

            // Drop whatever was terminated or moved since registration.
            let mut to_terminate = &partition.live_sectors & sectors;

            if total + count > self.policy.addressed_sectors_max {
                count = self.policy.addressed_sectors_max - total;
                // First-come slice: keep the lowest-numbered bits that still
                // fit under the cap.
                to_terminate =
                    match BitField::try_from_bits(to_terminate.iter().take(count as usize)) {
                        Ok(bf) => bf,
                        Err(e) => {
                            warn!(
                                deadline = loc.deadline,
                                partition = loc.partition,
                                "slicing termination bitfield: {e}"
                            );
                            continue;
                        }
                    };
                partial = Some(loc);
            }
            total += count;

            terminations.push(TerminationDeclaration {
                deadline: loc.deadline,
                partition: loc.partition,
                sectors: to_terminate,
            });

            if total >= cmp::min(self.policy.addressed_sectors_max, self.cfg.terminate_batch_max)
                || terminations.len() as u64 >= self.policy.declarations_max
            {
                break;
            }
        }

        if terminations.is_empty() {
            return Ok(None);
        }
        if notif && total < self.cfg.terminate_batch_max {
            return Ok(None);
        }
        if after && total < self.cfg.terminate_batch_min {
            return Ok(None);
        }

        let params = TerminateSectorsParams { terminations };
        let enc = fvm_ipld_encoding::to_vec(&params)
            .context("couldn't serialize TerminateSectors params")?;

        let mi = self
            .api
            .state_miner_info(&self.maddr, None)
            .await
            .context("couldn't get miner info")?;

        let max_fee = self.fee_cfg.max_terminate_gas_fee.clone();
        let (from, _) = self
            .addr_sel
            .address_for(&mi, AddressUse::TerminateSectors, &max_fee, &max_fee)
            .await
            .context("no good address found")?;

        let message_cid = self
            .api
            .messager_send_msg(
                &from,
                &self.maddr,
                Method::TerminateSectors as MethodNum,
                TokenAmount::zero(),
                max_fee,
                enc.into(),
            )
            .await
            .context("sending message failed")?;
        info!(
            "sent TerminateSectors message {message_cid} from {from} with {} declarations",
            params.terminations.len()
        );

        for t in &params.terminations {
            let loc = SectorLocation {
                deadline: t.deadline,
                partition: t.partition,
            };
            if partial == Some(loc) {
                // Only the submitted slice is retired; the rest of the
                // bucket stays enrolled for a later batch.
                if let Some(pending) = state.todo.get_mut(&loc) {
                    *pending -= &t.sectors;
                }
            } else {
                state.todo.remove(&loc);
            }

            for sector in t.sectors.iter() {
                for waiter in state.waiting.remove(&sector).unwrap_or_default() {
                    let _ = waiter.try_send(message_cid);
                }
            }
        }

        Ok(Some(message_cid))
    }
}

/// Whether `loc_deadline` falls in the currently challenged proving window
/// or either window adjacent to it. "Previous" is written as
/// `(loc_deadline + 1) % period == current`, which selects the same set as
/// `loc_deadline == (current + period - 1) % period`.
fn challenge_adjacent(loc_deadline: u64, current: u64, period_deadlines: u64) -> bool {
    loc_deadline == current
        || loc_deadline == (current + 1) % period_deadlines
        || (loc_deadline + 1) % period_deadlines == current
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::challenge_adjacent;

    #[test]
    fn adjacency_wraps_around_the_proving_period() {
        // current = 0: previous is the last deadline of the period.
        assert!(challenge_adjacent(47, 0, 48));
        assert!(challenge_adjacent(0, 0, 48));
        assert!(challenge_adjacent(1, 0, 48));
        assert!(!challenge_adjacent(2, 0, 48));
        assert!(!challenge_adjacent(46, 0, 48));

        // current = last: next wraps to 0.
        assert!(challenge_adjacent(0, 47, 48));
        assert!(challenge_adjacent(46, 47, 48));
        assert!(!challenge_adjacent(1, 47, 48));
    }

    #[quickcheck]
    fn adjacency_matches_the_subtractive_form(loc: u64, current: u64, period: u64) -> bool {
        let period = 3 + period % 48;
        let loc = loc % period;
        let current = current % period;

        let subtractive = loc == current
            || loc == (current + 1) % period
            || loc == (current + period - 1) % period;
        challenge_adjacent(loc, current, period) == subtractive
    }
}
