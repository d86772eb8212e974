mod command;
mod descriptor;
mod error;
mod log;
mod types;

pub use command::{codec_fragment, join_tokens, video_args};
pub use descriptor::{
    CapabilityDescriptor, CodecCommand, DefaultSelections, EncodeSpeedPreset, EnablementFlags,
    OptimizePreset, PassRule, QualityPreset, opt,
};
pub use error::ResolveError;
pub use log::init_tracing;
pub use types::{CodecId, MediaType, PassMode, QualityMode};
