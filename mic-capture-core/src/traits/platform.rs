use crate::models::error::CaptureError;
use crate::models::pcm::{ChannelLayout, SampleEncoding, SourceKind};
use crate::traits::capture_device::CaptureDevice;

/// Parameters for constructing a capture device handle.
///
/// The same five values feed both construction paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceParams {
    pub source: SourceKind,
    pub sample_rate: u32,
    pub channel_layout: ChannelLayout,
    pub encoding: SampleEncoding,
    /// Device buffer size in bytes, from `min_buffer_size`.
    pub buffer_bytes: i32,
}

/// Interface to the host audio capture API.
///
/// Implemented by:
/// - `SimPlatform` (mic-capture-sim)
/// - Future: OS backends wrapping the native capture stack.
pub trait CapturePlatform: Send + Sync {
    /// Whether the process currently holds microphone-capture permission.
    ///
    /// Queried on every device access until a handle exists; denial is
    /// treated as "no device", never as an error.
    fn has_capture_permission(&self) -> bool;

    /// Minimum device buffer size in bytes for the given format.
    fn min_buffer_size(
        &self,
        sample_rate: u32,
        channel_layout: ChannelLayout,
        encoding: SampleEncoding,
    ) -> i32;

    /// Whether the builder-style construction path exists on this platform
    /// version. When false, construction goes straight to `open_device`.
    fn supports_stream_builder(&self) -> bool;

    /// Builder-style construction (modern platform versions).
    ///
    /// Known to fail on some device/driver combinations even when nominally
    /// supported; callers fall back to `open_device` on any error.
    fn build_device(&self, params: &DeviceParams) -> Result<Box<dyn CaptureDevice>, CaptureError>;

    /// Legacy positional construction. The path of last resort: there is no
    /// further fallback behind it.
    fn open_device(&self, params: &DeviceParams) -> Result<Box<dyn CaptureDevice>, CaptureError>;
}
