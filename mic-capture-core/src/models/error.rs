use thiserror::Error;

/// Errors surfaced by the device construction seam.
///
/// The read/lifecycle path never returns these: read failures travel as raw
/// negative codes (`models::read_code`) and lifecycle calls degrade to
/// no-ops, so a backend only reports typed errors while building a handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Permission was revoked between the gate check and device activation.
    #[error("permission denied")]
    PermissionDenied,

    /// No capture hardware is attached.
    #[error("device not available")]
    DeviceNotAvailable,

    #[error("construction failed: {0}")]
    ConstructionFailed(String),
}
