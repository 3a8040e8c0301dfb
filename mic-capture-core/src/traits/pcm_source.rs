/// Pull-based PCM source consumed by a downstream stream/encoder.
///
/// The consumer drives the loop: call `read` to pull one frame, then pair
/// the returned count with `current_presentation_timestamp` for muxing.
/// `read` is legal in either lifecycle state but only meaningful while
/// running; a stopped source returns whatever its device yields (typically a
/// negative code).
pub trait PcmSource: Send + Sync {
    fn is_running(&self) -> bool;

    /// Idempotent: a running source ignores the call.
    fn start_running(&self);

    /// Idempotent: a stopped source ignores the call.
    fn stop_running(&self);

    /// Pull one frame of PCM into `buf`.
    ///
    /// Returns bytes read (≥ 0) or a negative code from `models::read_code`.
    /// Blocks until the device yields data or fails.
    fn read(&self, buf: &mut [u8]) -> i32;

    /// Timestamp of the most recent successful read.
    ///
    /// `0` until the first frame of the current run. Strictly increasing
    /// across successful reads within a run; treat it as an opaque ordering
    /// value rather than a duration in any one unit.
    fn current_presentation_timestamp(&self) -> i64;
}
