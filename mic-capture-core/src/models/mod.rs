pub mod config;
pub mod error;
pub mod pcm;
pub mod read_code;
pub mod state;
