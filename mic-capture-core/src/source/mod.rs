pub mod clock;
pub mod mic_source;
