#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Cold Chain
//!
//! > **A small supply-chain simulation: dairy goods, packaging, and the trucks
//! > that carry them.**
//!
//! Goods are plain data ([`model`]). Transports keep a weight and volume budget
//! and spend simulated time on every item they handle ([`transport`]). Milk
//! batches, loose or packed, live in registry actors that run pasteurization
//! programmes in the background ([`dairy_actor`]); transports live in another
//! ([`fleet_actor`]).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Goods ([`model`], [`transport`])
//! - [`Product`](model::Product), [`Milk`](model::Milk), [`Pack`](model::Pack),
//!   [`PackedMilk`](model::PackedMilk), all loadable through the
//!   [`Goods`](model::Goods) trait.
//! - [`Transport`](transport::Transport) with all-or-nothing
//!   [`load`](transport::Transport::load), `transportation` and `unload`.
//! - [`Pace`](transport::Pace) turns time units into real waits.
//!
//! ### 2. The Engine ([`framework`])
//! A generic [`Registry<T>`](framework::Registry) owning a keyed store and
//! processing requests one at a time, plus a
//! [`Scheduler`](framework::Scheduler) for actions that land later.
//!
//! ### 3. The Interface ([`clients`])
//! [`DairyClient`](clients::DairyClient) and
//! [`FleetClient`](clients::FleetClient) hide the message passing and return
//! typed errors.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`SupplySystem`](lifecycle::SupplySystem) spawns every registry from a
//! [`SimulationConfig`](lifecycle::SimulationConfig) and shuts them down.
//!
//! ## Error Handling
//! Building an entity from loosely-typed JSON can fail with
//! [`SupplyError::TypeMismatch`](error::SupplyError::TypeMismatch). A load that
//! does not fit is not an error, it returns `false`. Each registry has its own
//! error type ([`DairyError`](dairy_actor::DairyError),
//! [`FleetError`](fleet_actor::FleetError)).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # One time unit per 100ms, with info logs
//! COLD_CHAIN_TIME_UNIT_MS=100 RUST_LOG=info cargo run
//! ```
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod dairy_actor;
pub mod error;
pub mod fleet_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod transport;
