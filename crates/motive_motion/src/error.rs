//! Error types for motive_motion

use thiserror::Error;

/// A path-mode tween was asked to produce a value type that cannot be built
/// from a 2D sample point.
///
/// This is a programming error, not a runtime condition: the tween producer
/// picked an output type without point capability. Debug builds treat it as
/// fatal; release builds log and skip the emission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("path tween cannot produce values of type `{requested}`: not a 2D point type")]
pub struct UnsupportedTypeError {
    /// Name of the requested output type.
    pub requested: &'static str,
}
