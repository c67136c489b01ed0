//! Recognized video formats.

use std::path::Path;

/// File extensions accepted as conversion input.
pub fn supported_extensions() -> &'static [&'static str] {
    &["mp4", "mkv", "avi", "mov", "flv", "wmv", "ts", "aac"]
}

/// Check if a file extension is accepted, ignoring case.
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().iter().any(|e| *e == ext_lower)
}

/// Check if a path carries an accepted extension.
///
/// Only the file name is consulted; the file itself is never opened.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(is_supported_extension)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("mp4"));
        assert!(is_supported_extension("MKV"));
        assert!(is_supported_extension("Mov"));
        assert!(is_supported_extension("ts"));
        assert!(!is_supported_extension("txt"));
        assert!(!is_supported_extension("mp3"));
    }

    #[test]
    fn test_video_path_detection() {
        assert!(is_video_file(Path::new("/clips/a.mp4")));
        assert!(is_video_file(Path::new("/clips/A.WMV")));
        assert!(!is_video_file(Path::new("/clips/readme.txt")));
        assert!(!is_video_file(Path::new("/clips/no_extension")));
    }
}
