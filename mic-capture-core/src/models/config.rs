use serde::{Deserialize, Serialize};

use super::pcm::{ChannelLayout, SampleEncoding, SourceKind};

/// Configuration for a capture source.
///
/// Effectively immutable after first use: once the underlying device handle
/// has been created, replacing the configuration has no effect on the open
/// handle (see `AudioCaptureSource::configure`). Set everything up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfiguration {
    /// Channel layout (default: mono).
    pub channel_layout: ChannelLayout,

    /// Sample encoding (default: 16-bit linear PCM).
    pub encoding: SampleEncoding,

    /// Sample rate in Hz (default: 44100).
    pub sample_rate: u32,

    /// Logical input to capture from (default: camcorder microphone).
    pub source: SourceKind,

    /// Number of samples requested per read call (default: 1024).
    pub frame_sample_count: usize,
}

impl CaptureConfiguration {
    /// Bytes requested from the device per read call.
    pub fn frame_bytes(&self) -> usize {
        self.frame_sample_count * self.encoding.bytes_per_sample()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        if self.frame_sample_count == 0 {
            return Err("frame sample count must be positive".into());
        }
        Ok(())
    }
}

impl Default for CaptureConfiguration {
    fn default() -> Self {
        Self {
            channel_layout: ChannelLayout::Mono,
            encoding: SampleEncoding::Pcm16,
            sample_rate: 44100,
            source: SourceKind::Camcorder,
            frame_sample_count: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CaptureConfiguration::default();
        assert_eq!(config.channel_layout, ChannelLayout::Mono);
        assert_eq!(config.encoding, SampleEncoding::Pcm16);
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.source, SourceKind::Camcorder);
        assert_eq!(config.frame_sample_count, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn frame_bytes_accounts_for_sample_width() {
        let config = CaptureConfiguration::default();
        assert_eq!(config.frame_bytes(), 2048);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let config = CaptureConfiguration {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_frame_sample_count() {
        let config = CaptureConfiguration {
            frame_sample_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: CaptureConfiguration =
            serde_json::from_str(r#"{"sample_rate": 48000, "source": "default"}"#).unwrap();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.source, SourceKind::Default);
        assert_eq!(config.frame_sample_count, 1024);
    }
}
