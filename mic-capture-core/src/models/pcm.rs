use serde::{Deserialize, Serialize};

/// Channel layout of the captured PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    pub fn channel_count(self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }
}

/// Sample encoding of the captured PCM stream.
///
/// Only 16-bit linear PCM is supported by the capture path today; the enum
/// exists so the platform boundary carries an explicit format rather than a
/// bare byte width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleEncoding {
    Pcm16,
}

impl SampleEncoding {
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::Pcm16 => 2,
        }
    }
}

/// Logical input the platform should route to the capture device.
///
/// `Camcorder` selects the microphone tuned for A/V recording (paired with
/// the camera where the hardware has one); `Default` is the system default
/// microphone; `VoiceCommunication` is the echo-cancelled call input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Default,
    Camcorder,
    VoiceCommunication,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts() {
        assert_eq!(ChannelLayout::Mono.channel_count(), 1);
        assert_eq!(ChannelLayout::Stereo.channel_count(), 2);
    }

    #[test]
    fn pcm16_is_two_bytes() {
        assert_eq!(SampleEncoding::Pcm16.bytes_per_sample(), 2);
    }

    #[test]
    fn source_kind_serde_names() {
        let json = serde_json::to_string(&SourceKind::Camcorder).unwrap();
        assert_eq!(json, "\"camcorder\"");
    }
}
