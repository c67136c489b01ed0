//! Folder scanning for video files.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};
use walkdir::WalkDir;

use super::filter::is_video_file;

/// Collect video files under `dir`.
///
/// A shallow scan looks at the folder's direct children only; a
/// recursive scan descends into every subfolder. A symlink counts as a
/// file when its target is a regular file. Entries that cannot be read
/// (permissions, dangling links) are skipped.
pub fn scan_folder(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    ensure!(dir.is_dir(), "not a folder: {}", dir.display());

    let mut walker = WalkDir::new(dir).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let files = walker
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file())
        })
        .map(|entry| entry.into_path())
        .filter(|path| is_video_file(path))
        .collect();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("create file");
    }

    #[test]
    fn test_shallow_scan_skips_subfolders() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("a.mp4"));
        touch(&dir.path().join("b.MKV"));
        touch(&dir.path().join("notes.txt"));
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        touch(&dir.path().join("nested").join("c.avi"));

        let mut found = scan_folder(dir.path(), false).expect("scan");
        found.sort();
        let names: Vec<_> = found
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, ["a.mp4", "b.MKV"]);
    }

    #[test]
    fn test_recursive_scan_descends() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("a.mp4"));
        let nested = dir.path().join("x").join("y");
        fs::create_dir_all(&nested).expect("mkdir");
        touch(&nested.join("deep.wmv"));
        touch(&nested.join("skip.doc"));

        let found = scan_folder(dir.path(), true).expect("scan");
        let mut names: Vec<String> = found
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .map(|n| n.to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["a.mp4", "deep.wmv"]);
    }

    #[test]
    fn test_empty_folder_yields_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(scan_folder(dir.path(), true).expect("scan").is_empty());
    }

    #[test]
    fn test_scan_rejects_missing_folder() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(scan_folder(&dir.path().join("gone"), false).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_video_counts_as_file() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("real.mp4");
        touch(&target);
        let link = dir.path().join("alias.mkv");
        symlink(&target, &link).expect("symlink");
        let broken = dir.path().join("broken.avi");
        symlink(dir.path().join("gone.avi"), &broken).expect("symlink");

        let mut found = scan_folder(dir.path(), false).expect("scan");
        found.sort();
        assert_eq!(found, [link, target]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subfolder_contributes_nothing() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("ok.mp4"));
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).expect("mkdir");
        touch(&locked.join("hidden.mp4"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

        // Root ignores permission bits; the folder stays readable and
        // the scan would legitimately see inside it.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
            return;
        }

        let found = scan_folder(dir.path(), true).expect("scan");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");

        assert_eq!(found, [dir.path().join("ok.mp4")]);
    }
}
