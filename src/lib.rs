//! Video to MP3 Converter Library
//!
//! Batch-extracts MP3 audio from video files through an external
//! ffmpeg process, with a native egui front end.

pub mod app;
pub mod collector;
pub mod converter;

// Re-export commonly used types
pub use app::ConverterApp;
pub use collector::FileList;
pub use converter::{start_batch, BatchEvent, Bitrate, ConversionOptions, Encoder};
