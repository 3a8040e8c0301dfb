use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use parking_lot::Mutex;

use crate::models::config::CaptureConfiguration;
use crate::models::error::CaptureError;
use crate::models::read_code::{self, ReadFailure};
use crate::models::state::DeviceSlot;
use crate::source::clock::{MonotonicClock, SampleClock};
use crate::traits::capture_device::CaptureDevice;
use crate::traits::pcm_source::PcmSource;
use crate::traits::platform::{CapturePlatform, DeviceParams};

/// Timestamp sentinel: no frame delivered yet in the current run.
const DEFAULT_TIMESTAMP: i64 = 0;

/// A pull-based microphone capture source.
///
/// Owns a lazily constructed device handle behind a permission gate, exposes
/// an idempotent start/stop lifecycle on an atomic flag, and stamps each
/// successful read with a monotonically increasing presentation timestamp
/// for a downstream stream/encoder to pair with the frame.
///
/// Thread model: a capture thread may call `read` while a controller thread
/// calls `start_running`/`stop_running`. The running flag and timestamp are
/// atomics; the handle slot, min-buffer cache, and configuration sit behind
/// mutexes. Concurrent `read` callers are the caller's problem, not ours.
pub struct AudioCaptureSource<P: CapturePlatform> {
    platform: P,
    clock: Box<dyn SampleClock>,
    config: Mutex<CaptureConfiguration>,
    min_buffer_size: Mutex<Option<i32>>,
    device: Mutex<DeviceSlot>,
    running: AtomicBool,
    timestamp: AtomicI64,
}

impl<P: CapturePlatform> AudioCaptureSource<P> {
    /// Source with the default configuration (mono, 16-bit PCM, 44100 Hz,
    /// camcorder input, 1024-sample frames).
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, CaptureConfiguration::default())
    }

    pub fn with_config(platform: P, config: CaptureConfiguration) -> Self {
        Self::with_clock(platform, config, Box::new(MonotonicClock::new()))
    }

    /// Full constructor with an explicit clock. Tests pin the clock; normal
    /// use goes through `new`/`with_config`.
    pub fn with_clock(
        platform: P,
        config: CaptureConfiguration,
        clock: Box<dyn SampleClock>,
    ) -> Self {
        Self {
            platform,
            clock,
            config: Mutex::new(config),
            min_buffer_size: Mutex::new(None),
            device: Mutex::new(DeviceSlot::Uninitialized),
            running: AtomicBool::new(false),
            timestamp: AtomicI64::new(DEFAULT_TIMESTAMP),
        }
    }

    /// Replace the configuration.
    ///
    /// Only effective before first use: an already-open device handle and an
    /// already-computed min buffer size are never rebuilt from new values.
    pub fn configure(&self, config: CaptureConfiguration) {
        *self.config.lock() = config;
    }

    pub fn config(&self) -> CaptureConfiguration {
        self.config.lock().clone()
    }

    /// Minimum device buffer size in bytes for the configured format.
    ///
    /// Computed once via the platform query and cached for the source's
    /// lifetime; configuration changes after that point do not invalidate it.
    pub fn min_buffer_size(&self) -> i32 {
        let mut cache = self.min_buffer_size.lock();
        *cache.get_or_insert_with(|| {
            let config = self.config.lock();
            self.platform
                .min_buffer_size(config.sample_rate, config.channel_layout, config.encoding)
        })
    }

    /// Run `f` against the cached device handle, constructing it first if
    /// needed.
    ///
    /// Permission is rechecked on every call until a handle exists; denial
    /// and construction failure both leave the slot `Unavailable`, so the
    /// next call re-evaluates. Once `Ready` the handle is frozen.
    fn with_device<R>(&self, f: impl FnOnce(Option<&mut Box<dyn CaptureDevice>>) -> R) -> R {
        let mut slot = self.device.lock();
        if !slot.is_ready() {
            if !self.platform.has_capture_permission() {
                *slot = DeviceSlot::Unavailable;
            } else {
                match self.construct_device() {
                    Ok(device) => *slot = DeviceSlot::Ready(device),
                    Err(err) => {
                        log::error!("capture device construction failed: {err}");
                        *slot = DeviceSlot::Unavailable;
                    }
                }
            }
        }
        f(slot.device_mut())
    }

    /// Ordered construction strategies: builder path where the platform has
    /// one, then the legacy positional path with the same parameters. The
    /// legacy path is last; its error is final.
    fn construct_device(&self) -> Result<Box<dyn CaptureDevice>, CaptureError> {
        let buffer_bytes = self.min_buffer_size();
        let params = {
            let config = self.config.lock();
            DeviceParams {
                source: config.source,
                sample_rate: config.sample_rate,
                channel_layout: config.channel_layout,
                encoding: config.encoding,
                buffer_bytes,
            }
        };
        if self.platform.supports_stream_builder() {
            match self.platform.build_device(&params) {
                Ok(device) => return Ok(device),
                Err(err) => {
                    log::debug!("builder construction failed, using legacy path: {err}");
                }
            }
        }
        self.platform.open_device(&params)
    }

    /// Start capture. No-op while already running.
    ///
    /// Resets the presentation timestamp, so the first frame of the new run
    /// re-establishes its origin from the clock.
    pub fn start_running(&self) {
        if self.running.load(Ordering::SeqCst) {
            return;
        }
        log::debug!("start_running()");
        self.timestamp.store(DEFAULT_TIMESTAMP, Ordering::SeqCst);
        self.with_device(|device| {
            if let Some(device) = device {
                device.start_recording();
            }
        });
        self.running.store(true, Ordering::SeqCst);
    }

    /// Stop capture. No-op while already stopped.
    ///
    /// The device handle is kept cached for a subsequent start. Shares the
    /// handle lock with `read`, so an in-flight blocking read delivers its
    /// frame first: stop latency is up to one frame duration.
    pub fn stop_running(&self) {
        if !self.running.load(Ordering::SeqCst) {
            return;
        }
        log::debug!("stop_running()");
        self.with_device(|device| {
            if let Some(device) = device {
                device.stop();
            }
        });
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Pull one frame of PCM into `buf`.
    ///
    /// Requests `frame_sample_count * 2` bytes from the device; without a
    /// handle (permission denied, construction failed) the result is
    /// `read_code::ERROR`. A non-negative count advances the presentation
    /// timestamp; a negative count leaves it untouched and is logged with
    /// its classification, never turned into a panic or typed error.
    pub fn read(&self, buf: &mut [u8]) -> i32 {
        let (requested, sample_rate, bytes_per_sample) = {
            let config = self.config.lock();
            (
                config.frame_bytes(),
                config.sample_rate,
                config.encoding.bytes_per_sample(),
            )
        };
        let result = self.with_device(|device| match device {
            Some(device) => device.read(buf, requested),
            None => read_code::ERROR,
        });
        if result >= 0 {
            let samples_read = result as i64 / bytes_per_sample as i64;
            if self.timestamp.load(Ordering::SeqCst) == DEFAULT_TIMESTAMP {
                // Origin of the run: a monotonic clock reading in nanoseconds.
                self.timestamp.store(self.clock.now_nanos(), Ordering::SeqCst);
            } else {
                // Advance is microsecond-scaled while the origin is a
                // nanosecond reading. The mixed units are deliberate:
                // downstream pairs frames by ordering, not by unit, and the
                // value is documented as opaque.
                let delta =
                    (1_000_000.0 * (samples_read as f64 / sample_rate as f64)) as i64;
                self.timestamp.fetch_add(delta, Ordering::SeqCst);
            }
        } else {
            log::warn!("capture read failed: {}", ReadFailure::from_code(result));
        }
        result
    }

    /// Timestamp of the most recent successful read; `0` until the first
    /// frame of the current run. Treat as an opaque monotonic ordering value.
    pub fn current_presentation_timestamp(&self) -> i64 {
        self.timestamp.load(Ordering::SeqCst)
    }
}

impl<P: CapturePlatform> PcmSource for AudioCaptureSource<P> {
    fn is_running(&self) -> bool {
        self.is_running()
    }

    fn start_running(&self) {
        self.start_running();
    }

    fn stop_running(&self) {
        self.stop_running();
    }

    fn read(&self, buf: &mut [u8]) -> i32 {
        self.read(buf)
    }

    fn current_presentation_timestamp(&self) -> i64 {
        self.current_presentation_timestamp()
    }
}
