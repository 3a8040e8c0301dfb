//! # mic-capture-sim
//!
//! Simulated capture backend for mic-capture-kit.
//!
//! Provides:
//! - `SimPlatform` — `CapturePlatform` with toggles for permission grant,
//!   device attachment, builder-path availability, and failure injection
//! - `SimDevice` — deterministic 440 Hz sine PCM device
//!
//! ## Usage
//! ```
//! use mic_capture_core::AudioCaptureSource;
//! use mic_capture_sim::SimPlatform;
//!
//! let source = AudioCaptureSource::new(SimPlatform::new());
//! let mut frame = vec![0u8; 2048];
//! source.start_running();
//! let bytes = source.read(&mut frame);
//! assert_eq!(bytes, 2048);
//! ```

pub mod device;
pub mod platform;

pub use device::SimDevice;
pub use platform::SimPlatform;
