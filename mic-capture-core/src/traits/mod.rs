pub mod capture_device;
pub mod pcm_source;
pub mod platform;
