use crate::traits::capture_device::CaptureDevice;

/// Cache state for the lazily constructed, permission-gated device handle.
///
/// Transitions:
/// ```text
/// Uninitialized → Unavailable   (permission denied or construction failed)
/// Uninitialized → Ready          (construction succeeded)
/// Unavailable   → Ready          (re-evaluated on every access until it succeeds)
/// ```
/// `Ready` is frozen: the handle is reused for the owner's lifetime and is
/// never released by `stop_running()`.
pub enum DeviceSlot {
    Uninitialized,
    Unavailable,
    Ready(Box<dyn CaptureDevice>),
}

impl DeviceSlot {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// The cached handle, if construction has succeeded.
    pub fn device_mut(&mut self) -> Option<&mut Box<dyn CaptureDevice>> {
        match self {
            Self::Ready(device) => Some(device),
            _ => None,
        }
    }
}

impl std::fmt::Debug for DeviceSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("Uninitialized"),
            Self::Unavailable => f.write_str("Unavailable"),
            Self::Ready(_) => f.write_str("Ready(..)"),
        }
    }
}
