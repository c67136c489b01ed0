//! Where queued files come from.

use std::path::PathBuf;

use super::filter::is_video_file;
use super::scan::scan_folder;

/// Anything that can contribute paths to the file list.
///
/// The list never cares whether paths came from a dialog, a folder
/// scan, or a drag-and-drop; each channel applies its own filtering
/// rules before the paths land in the list.
pub trait PathSource {
    fn collect_paths(&self) -> Vec<PathBuf>;
}

/// Files picked in a file dialog. Taken verbatim; the dialog's own
/// type filter is trusted.
pub struct SelectedFiles(pub Vec<PathBuf>);

impl PathSource for SelectedFiles {
    fn collect_paths(&self) -> Vec<PathBuf> {
        self.0.clone()
    }
}

/// A folder to scan for video files.
pub struct FolderScan {
    pub dir: PathBuf,
    pub recursive: bool,
}

impl PathSource for FolderScan {
    fn collect_paths(&self) -> Vec<PathBuf> {
        match scan_folder(&self.dir, self.recursive) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("Folder scan failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Items dropped onto the window. Folders expand recursively; loose
/// files must carry a recognized extension.
pub struct DroppedItems(pub Vec<PathBuf>);

impl PathSource for DroppedItems {
    fn collect_paths(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        for path in &self.0 {
            if path.is_dir() {
                match scan_folder(path, true) {
                    Ok(files) => out.extend(files),
                    Err(e) => log::warn!("Ignoring dropped folder: {}", e),
                }
            } else if is_video_file(path) {
                out.push(path.clone());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("create file");
    }

    #[test]
    fn test_selected_files_are_taken_verbatim() {
        let source = SelectedFiles(vec![
            PathBuf::from("/clips/a.mp4"),
            PathBuf::from("/clips/notes.txt"),
        ]);
        assert_eq!(source.collect_paths().len(), 2);
    }

    #[test]
    fn test_dropped_items_expand_folders_and_filter_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sub = dir.path().join("clips");
        fs::create_dir(&sub).expect("mkdir");
        touch(&sub.join("a.mp4"));
        touch(&sub.join("notes.txt"));
        let nested = sub.join("more");
        fs::create_dir(&nested).expect("mkdir");
        touch(&nested.join("b.MOV"));

        let loose_video = dir.path().join("loose.wmv");
        touch(&loose_video);
        let loose_other = dir.path().join("loose.pdf");
        touch(&loose_other);

        let source = DroppedItems(vec![sub.clone(), loose_video.clone(), loose_other]);
        let mut found = source.collect_paths();
        found.sort();

        let mut expected = vec![sub.join("a.mp4"), nested.join("b.MOV"), loose_video];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_folder_scan_source_honors_depth() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("top.mp4"));
        let nested = dir.path().join("inner");
        fs::create_dir(&nested).expect("mkdir");
        touch(&nested.join("deep.mp4"));

        let shallow = FolderScan {
            dir: dir.path().to_path_buf(),
            recursive: false,
        };
        assert_eq!(shallow.collect_paths(), vec![dir.path().join("top.mp4")]);

        let deep = FolderScan {
            dir: dir.path().to_path_buf(),
            recursive: true,
        };
        assert_eq!(deep.collect_paths().len(), 2);
    }
}
