//! chart-scrub: scrubbable chart beacon engine.
//!
//! Given numeric series on a shared index axis, the engine resolves pointer
//! positions to the nearest sample, projects it through configurable axis
//! scales, and decides per target change whether the beacon snaps (while
//! scrubbing) or eases (idle pulses and live-data moves). Drawing, gesture
//! recognition and text layout stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{BeaconConfig, BeaconEngine, BeaconFrame};
pub use error::{ChartError, ChartResult};
