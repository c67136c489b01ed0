//! Per-file conversion jobs.

use std::path::{Path, PathBuf};

/// One input file paired with the MP3 path it will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    /// Pair an input with its output under `output_dir`.
    ///
    /// The output keeps the input's file stem and always gets a
    /// lowercase `.mp3` extension; the input's own folder is ignored.
    pub fn new(input: PathBuf, output_dir: &Path) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "output".to_string());
        let output = output_dir.join(format!("{}.mp3", stem));

        Self { input, output }
    }

    /// The input's file name, for status lines.
    pub fn input_filename(&self) -> String {
        self.input
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_derivation() {
        let job = ConversionJob::new(PathBuf::from("/videos/clips/Holiday.MP4"), Path::new("/out"));
        assert_eq!(job.output, PathBuf::from("/out/Holiday.mp3"));
    }

    #[test]
    fn test_output_extension_is_lowercase_mp3() {
        let job = ConversionJob::new(PathBuf::from("a.WMV"), Path::new("/music"));
        assert_eq!(job.output, PathBuf::from("/music/a.mp3"));
    }

    #[test]
    fn test_dotted_stem_keeps_inner_dots() {
        let job = ConversionJob::new(PathBuf::from("/v/My.Trip.2019.mkv"), Path::new("/out"));
        assert_eq!(job.output, PathBuf::from("/out/My.Trip.2019.mp3"));
    }

    #[test]
    fn test_input_without_extension() {
        let job = ConversionJob::new(PathBuf::from("/v/raw"), Path::new("/out"));
        assert_eq!(job.output, PathBuf::from("/out/raw.mp3"));
    }

    #[test]
    fn test_input_filename() {
        let job = ConversionJob::new(PathBuf::from("/v/clip.mp4"), Path::new("/out"));
        assert_eq!(job.input_filename(), "clip.mp4");
    }
}
