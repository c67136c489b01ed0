//! Conversion settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// MP3 bitrates offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Bitrate {
    /// 128 kbit/s, smallest files
    #[default]
    Kbps128,
    /// 192 kbit/s
    Kbps192,
    /// 256 kbit/s
    Kbps256,
    /// 320 kbit/s, best quality
    Kbps320,
}

impl Bitrate {
    /// Returns the bitrate argument passed to the encoder.
    pub fn ffmpeg_arg(&self) -> &'static str {
        match self {
            Bitrate::Kbps128 => "128k",
            Bitrate::Kbps192 => "192k",
            Bitrate::Kbps256 => "256k",
            Bitrate::Kbps320 => "320k",
        }
    }

    /// Returns a human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Bitrate::Kbps128 => "128 kbps",
            Bitrate::Kbps192 => "192 kbps",
            Bitrate::Kbps256 => "256 kbps",
            Bitrate::Kbps320 => "320 kbps",
        }
    }

    /// All selectable bitrates, lowest first.
    pub fn all() -> &'static [Bitrate] {
        &[
            Bitrate::Kbps128,
            Bitrate::Kbps192,
            Bitrate::Kbps256,
            Bitrate::Kbps320,
        ]
    }
}

/// Settings for a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Where converted files are written
    pub output_dir: PathBuf,
    /// Target MP3 bitrate
    pub bitrate: Bitrate,
    /// Collected from the UI but not applied; outputs always land
    /// directly in `output_dir`.
    pub keep_subfolder_structure: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            bitrate: Bitrate::default(),
            keep_subfolder_structure: false,
        }
    }
}

/// The user's music folder, or `~/Music`, or the current directory as
/// a last resort.
pub fn default_output_dir() -> PathBuf {
    dirs::audio_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Music")))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitrate_encoder_args() {
        assert_eq!(Bitrate::Kbps128.ffmpeg_arg(), "128k");
        assert_eq!(Bitrate::Kbps192.ffmpeg_arg(), "192k");
        assert_eq!(Bitrate::Kbps256.ffmpeg_arg(), "256k");
        assert_eq!(Bitrate::Kbps320.ffmpeg_arg(), "320k");
    }

    #[test]
    fn test_default_bitrate_is_lowest() {
        assert_eq!(Bitrate::default(), Bitrate::Kbps128);
        assert_eq!(Bitrate::all()[0], Bitrate::Kbps128);
    }

    #[test]
    fn test_all_bitrates_listed() {
        assert_eq!(Bitrate::all().len(), 4);
    }

    #[test]
    fn test_default_output_dir_is_set() {
        assert!(!default_output_dir().as_os_str().is_empty());
    }
}
