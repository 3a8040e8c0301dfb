//! # mic-capture-core
//!
//! Platform-agnostic microphone capture source.
//!
//! Provides a pull-based PCM source with an idempotent start/stop lifecycle,
//! a lazily constructed permission-gated device handle, and monotonically
//! increasing presentation timestamps for downstream encoding/muxing.
//! Platform backends implement the `CapturePlatform` and `CaptureDevice`
//! traits and plug into the generic `AudioCaptureSource`.
//!
//! ## Architecture
//!
//! ```text
//! mic-capture-core (this crate)
//! ├── traits/   ← CapturePlatform, CaptureDevice, PcmSource
//! ├── models/   ← CaptureConfiguration, CaptureError, DeviceSlot, read codes
//! └── source/   ← AudioCaptureSource, SampleClock
//! ```

pub mod models;
pub mod source;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::CaptureConfiguration;
pub use models::error::CaptureError;
pub use models::pcm::{ChannelLayout, SampleEncoding, SourceKind};
pub use models::read_code::ReadFailure;
pub use models::state::DeviceSlot;
pub use source::clock::{MonotonicClock, SampleClock};
pub use source::mic_source::AudioCaptureSource;
pub use traits::capture_device::CaptureDevice;
pub use traits::pcm_source::PcmSource;
pub use traits::platform::{CapturePlatform, DeviceParams};
