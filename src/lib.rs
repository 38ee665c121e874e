// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Sealing support services for a Filecoin storage provider.
//!
//! The crate is an embedded library: the daemon wires its chain view,
//! message submitter and wallet logic into the trait seams in [`api`] and
//! gets back long-running coordinators. The only coordinator at the moment
//! is the [`terminate_batch::TerminateBatcher`], which aggregates sector
//! retirement requests into batched `TerminateSectors` messages.

pub mod api;
pub mod config;
pub mod terminate_batch;
pub mod types;

pub use api::{AddressSelector, AddressUse, TerminateBatcherApi};
pub use config::{MinerFeeConfig, TerminateBatchConfig};
pub use terminate_batch::TerminateBatcher;
pub use types::{MinerInfo, Partition, SectorLocation, TerminateOutcome, TipSetToken};
