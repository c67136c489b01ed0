//! Batch audio extraction.
//!
//! Turns queued video files into MP3s by running ffmpeg once per file
//! on a background worker.

mod encoder;
mod job;
mod options;
mod sequencer;

pub use encoder::{Encoder, EncoderError};
pub use job::ConversionJob;
pub use options::{default_output_dir, Bitrate, ConversionOptions};
pub use sequencer::{start_batch, BatchEvent, BatchHandle};
