//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden; every registry line carries an
//! `entity_type` field (`Milk`, `Transport`) and the entity id instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, loads, arrivals, pasteurizations
//! RUST_LOG=debug cargo run    # plus full payloads and every handled item
//! ```
//!
//! A run of the demo at `info` reads roughly:
//!
//! ```text
//! INFO Registry started entity_type="Transport"
//! INFO Created entity_type="Transport" id=transport_1 size=1
//! INFO Load accepted items=5 on_board=5 free_weight=96.0 free_volume=40.0
//! INFO Arrived distance=20.0
//! INFO Pasteurization started milk_id=milk_1 method=instant ready_in=2s
//! INFO Milk pasteurized from=Not pasteurized to=sterilized shelf_life="8 days, 0:00:00"
//! ```

/// Initialises the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
