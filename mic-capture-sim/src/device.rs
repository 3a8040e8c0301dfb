//! Simulated capture device.
//!
//! Produces a deterministic 440 Hz sine in 16-bit little-endian PCM so the
//! capture path can be exercised without hardware. The signal is a pure
//! function of the frame index, so two devices with the same format produce
//! identical bytes.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use mic_capture_core::models::read_code;
use mic_capture_core::traits::capture_device::CaptureDevice;

const TONE_HZ: f64 = 440.0;
const AMPLITUDE: f64 = 0.3;

pub struct SimDevice {
    sample_rate: u32,
    channels: usize,
    started: bool,
    /// Frames produced so far; signal phase derives from it.
    frame_index: u64,
    /// Sleep for the produced duration, approximating a blocking device.
    realtime: bool,
    /// One-shot failure code shared with the owning `SimPlatform`.
    injected_failure: Arc<Mutex<Option<i32>>>,
}

impl SimDevice {
    pub(crate) fn new(
        sample_rate: u32,
        channels: usize,
        realtime: bool,
        injected_failure: Arc<Mutex<Option<i32>>>,
    ) -> Self {
        Self {
            sample_rate,
            channels,
            started: false,
            frame_index: 0,
            realtime,
            injected_failure,
        }
    }

    fn sample_at(&self, frame: u64) -> i16 {
        let t = frame as f64 / self.sample_rate as f64;
        let value = (std::f64::consts::TAU * TONE_HZ * t).sin() * AMPLITUDE;
        (value * i16::MAX as f64) as i16
    }
}

impl CaptureDevice for SimDevice {
    fn start_recording(&mut self) {
        self.started = true;
    }

    fn stop(&mut self) {
        self.started = false;
    }

    fn read(&mut self, buf: &mut [u8], requested_bytes: usize) -> i32 {
        if !self.started {
            return read_code::ERROR_INVALID_OPERATION;
        }
        if let Some(code) = self.injected_failure.lock().take() {
            return code;
        }

        let sample_bytes = 2 * self.channels;
        let frames = requested_bytes.min(buf.len()) / sample_bytes;
        for i in 0..frames {
            let sample = self.sample_at(self.frame_index + i as u64);
            for ch in 0..self.channels {
                let offset = (i * self.channels + ch) * 2;
                buf[offset..offset + 2].copy_from_slice(&sample.to_le_bytes());
            }
        }
        self.frame_index += frames as u64;

        if self.realtime {
            thread::sleep(Duration::from_secs_f64(
                frames as f64 / self.sample_rate as f64,
            ));
        }
        (frames * sample_bytes) as i32
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn device(sample_rate: u32, channels: usize) -> SimDevice {
        SimDevice::new(sample_rate, channels, false, Arc::new(Mutex::new(None)))
    }

    fn decode(buf: &[u8]) -> Vec<i16> {
        buf.chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    #[test]
    fn read_before_start_is_invalid_operation() {
        let mut dev = device(44100, 1);
        let mut buf = vec![0u8; 64];
        assert_eq!(
            dev.read(&mut buf, 64),
            read_code::ERROR_INVALID_OPERATION
        );
    }

    #[test]
    fn produces_the_requested_byte_count() {
        let mut dev = device(44100, 1);
        dev.start_recording();
        let mut buf = vec![0u8; 2048];
        assert_eq!(dev.read(&mut buf, 2048), 2048);
    }

    #[test]
    fn short_caller_buffer_clamps_the_read() {
        let mut dev = device(44100, 1);
        dev.start_recording();
        let mut buf = vec![0u8; 100];
        assert_eq!(dev.read(&mut buf, 2048), 100);
    }

    #[test]
    fn signal_is_a_sine_at_440_hz() {
        let mut dev = device(44100, 1);
        dev.start_recording();
        let mut buf = vec![0u8; 2048];
        dev.read(&mut buf, 2048);

        let samples = decode(&buf);
        assert_eq!(samples[0], 0); // sin(0)
        for (i, &sample) in samples.iter().enumerate().take(64) {
            let t = i as f64 / 44100.0;
            let expected = (std::f64::consts::TAU * 440.0 * t).sin() * 0.3;
            assert_relative_eq!(
                sample as f64 / i16::MAX as f64,
                expected,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn consecutive_reads_continue_the_phase() {
        let mut continuous = device(44100, 1);
        continuous.start_recording();
        let mut whole = vec![0u8; 256];
        continuous.read(&mut whole, 256);

        let mut split = device(44100, 1);
        split.start_recording();
        let mut first = vec![0u8; 128];
        let mut second = vec![0u8; 128];
        split.read(&mut first, 128);
        split.read(&mut second, 128);

        assert_eq!(&whole[..128], &first[..]);
        assert_eq!(&whole[128..], &second[..]);
    }

    #[test]
    fn stereo_duplicates_the_signal_per_channel() {
        let mut dev = device(44100, 2);
        dev.start_recording();
        let mut buf = vec![0u8; 64];
        assert_eq!(dev.read(&mut buf, 64), 64);

        let samples = decode(&buf);
        for frame in samples.chunks_exact(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn injected_failure_fires_once() {
        let failure = Arc::new(Mutex::new(None));
        let mut dev = SimDevice::new(44100, 1, false, Arc::clone(&failure));
        dev.start_recording();
        let mut buf = vec![0u8; 64];

        *failure.lock() = Some(read_code::ERROR_DEAD_OBJECT);
        assert_eq!(dev.read(&mut buf, 64), read_code::ERROR_DEAD_OBJECT);
        assert_eq!(dev.read(&mut buf, 64), 64);
    }
}
