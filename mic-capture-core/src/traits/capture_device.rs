/// An open microphone capture session.
///
/// Implemented by platform backends (and by `mic-capture-sim` for
/// hardware-free use). The handle is created by a `CapturePlatform` and then
/// owned exclusively by one `AudioCaptureSource` for that source's lifetime.
pub trait CaptureDevice: Send {
    /// Begin buffering audio inside the device.
    fn start_recording(&mut self);

    /// Stop buffering. The handle stays valid and can be started again.
    fn stop(&mut self);

    /// Read up to `requested_bytes` of PCM into `buf`, blocking until the
    /// device yields data or fails.
    ///
    /// Returns the number of bytes read (possibly zero), or a negative code
    /// from `models::read_code` on failure.
    fn read(&mut self, buf: &mut [u8], requested_bytes: usize) -> i32;
}
