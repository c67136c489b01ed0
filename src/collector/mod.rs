//! Input file collection.
//!
//! Gathers video files from dialogs, folder scans, and drag-and-drop
//! into one ordered list.

mod filter;
mod list;
mod scan;
mod source;

pub use filter::{is_supported_extension, is_video_file, supported_extensions};
pub use list::FileList;
pub use scan::scan_folder;
pub use source::{DroppedItems, FolderScan, PathSource, SelectedFiles};
