use thiserror::Error;

use super::types::CodecId;

/// Errors raised while resolving control state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Codec '{0}' is not in the capability table")]
    UnknownCodec(String),

    #[error("No codec selected")]
    EmptyCodecSelection,

    /// Resolvers swallow this one: a control with no matching preset keeps
    /// whatever it displayed before.
    #[error("{codec} has no {control} preset named '{name}'")]
    MissingPresetMatch {
        codec: CodecId,
        control: &'static str,
        name: String,
    },
}
