mod beacon_config;
mod beacon_frame;
mod beacon_snapshot;
mod engine;
mod frame_controller;
mod interaction_validation;
mod label_format;
mod label_formatter_controller;
mod pointer_controller;
mod pulse_handle;
mod snapshot_controller;
mod target_resolver;
mod validation;

pub use beacon_config::{BeaconConfig, PulseTiming};
pub use beacon_frame::{BeaconFrame, BeaconTarget};
pub use beacon_snapshot::BeaconSnapshot;
pub use engine::{BeaconEngine, FrameSubscriber};
pub use label_format::{
    BeaconLabel, LabelContext, LabelFormatConfig, LabelFormatterFn, LabelLocale, TimestampPattern,
    format_beacon_label, format_label_context, format_label_value,
};
pub use pulse_handle::PulseHandle;
