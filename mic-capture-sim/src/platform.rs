//! Simulated capture platform.
//!
//! Implements `CapturePlatform` with runtime toggles for the behaviors a real
//! host varies: permission grant, device attachment, builder-path
//! availability (platform API level), builder-path flakiness, and device
//! read failures. Counters expose how often each seam was hit so callers can
//! assert on caching behavior.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use mic_capture_core::models::error::CaptureError;
use mic_capture_core::models::pcm::{ChannelLayout, SampleEncoding};
use mic_capture_core::traits::capture_device::CaptureDevice;
use mic_capture_core::traits::platform::{CapturePlatform, DeviceParams};

use crate::device::SimDevice;

/// Shared-handle simulated platform.
///
/// Clones share all state, so a test can keep one handle for toggling while
/// the `AudioCaptureSource` owns another.
#[derive(Clone)]
pub struct SimPlatform {
    builder_supported: bool,
    realtime: bool,
    permission: Arc<AtomicBool>,
    device_attached: Arc<AtomicBool>,
    builder_fails: Arc<AtomicBool>,
    min_buffer_queries: Arc<AtomicUsize>,
    builder_constructions: Arc<AtomicUsize>,
    legacy_constructions: Arc<AtomicUsize>,
    injected_failure: Arc<Mutex<Option<i32>>>,
}

impl SimPlatform {
    /// A modern platform: permission granted, builder path available.
    pub fn new() -> Self {
        Self {
            builder_supported: true,
            realtime: false,
            permission: Arc::new(AtomicBool::new(true)),
            device_attached: Arc::new(AtomicBool::new(true)),
            builder_fails: Arc::new(AtomicBool::new(false)),
            min_buffer_queries: Arc::new(AtomicUsize::new(0)),
            builder_constructions: Arc::new(AtomicUsize::new(0)),
            legacy_constructions: Arc::new(AtomicUsize::new(0)),
            injected_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// An older platform without the builder construction path.
    pub fn legacy() -> Self {
        Self {
            builder_supported: false,
            ..Self::new()
        }
    }

    /// Devices sleep for the duration of each frame they produce,
    /// approximating a blocking hardware read.
    pub fn with_realtime_pacing(mut self) -> Self {
        self.realtime = true;
        self
    }

    pub fn set_permission(&self, granted: bool) {
        self.permission.store(granted, Ordering::SeqCst);
    }

    /// Detach or reattach the capture hardware. While detached, both
    /// construction paths report `DeviceNotAvailable`.
    pub fn set_device_attached(&self, attached: bool) {
        self.device_attached.store(attached, Ordering::SeqCst);
    }

    /// Make the builder path fail until cleared; legacy construction keeps
    /// working, exercising the fallback.
    pub fn set_builder_fails(&self, fails: bool) {
        self.builder_fails.store(fails, Ordering::SeqCst);
    }

    /// Queue a one-shot failure code for the next device read.
    pub fn inject_read_failure(&self, code: i32) {
        *self.injected_failure.lock() = Some(code);
    }

    pub fn min_buffer_queries(&self) -> usize {
        self.min_buffer_queries.load(Ordering::SeqCst)
    }

    pub fn builder_constructions(&self) -> usize {
        self.builder_constructions.load(Ordering::SeqCst)
    }

    pub fn legacy_constructions(&self) -> usize {
        self.legacy_constructions.load(Ordering::SeqCst)
    }

    /// Activation-time checks shared by both construction paths. Permission
    /// is rechecked here because the grant can be revoked between the
    /// caller's gate check and device activation.
    fn activate(&self, params: &DeviceParams) -> Result<Box<dyn CaptureDevice>, CaptureError> {
        if !self.permission.load(Ordering::SeqCst) {
            return Err(CaptureError::PermissionDenied);
        }
        if !self.device_attached.load(Ordering::SeqCst) {
            return Err(CaptureError::DeviceNotAvailable);
        }
        Ok(Box::new(SimDevice::new(
            params.sample_rate,
            params.channel_layout.channel_count() as usize,
            self.realtime,
            Arc::clone(&self.injected_failure),
        )))
    }
}

impl Default for SimPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl CapturePlatform for SimPlatform {
    fn has_capture_permission(&self) -> bool {
        self.permission.load(Ordering::SeqCst)
    }

    fn min_buffer_size(
        &self,
        sample_rate: u32,
        channel_layout: ChannelLayout,
        encoding: SampleEncoding,
    ) -> i32 {
        self.min_buffer_queries.fetch_add(1, Ordering::SeqCst);
        // 100 ms of audio, the ballpark a real capture stack reports.
        let bytes_per_second = sample_rate as usize
            * channel_layout.channel_count() as usize
            * encoding.bytes_per_sample();
        (bytes_per_second / 10) as i32
    }

    fn supports_stream_builder(&self) -> bool {
        self.builder_supported
    }

    fn build_device(&self, params: &DeviceParams) -> Result<Box<dyn CaptureDevice>, CaptureError> {
        self.builder_constructions.fetch_add(1, Ordering::SeqCst);
        if self.builder_fails.load(Ordering::SeqCst) {
            return Err(CaptureError::ConstructionFailed(
                "stream builder rejected the format".into(),
            ));
        }
        log::debug!("sim device built via builder path: {params:?}");
        self.activate(params)
    }

    fn open_device(&self, params: &DeviceParams) -> Result<Box<dyn CaptureDevice>, CaptureError> {
        self.legacy_constructions.fetch_add(1, Ordering::SeqCst);
        log::debug!("sim device opened via legacy path: {params:?}");
        self.activate(params)
    }
}
