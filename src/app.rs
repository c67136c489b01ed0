//! Main application window.
//!
//! Lays out the file list, conversion settings, and progress display,
//! and owns the lifecycle of a running batch.

use std::collections::BTreeSet;
use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText};

use crate::collector::{supported_extensions, DroppedItems, FileList, FolderScan, SelectedFiles};
use crate::converter::{start_batch, BatchEvent, BatchHandle, Bitrate, ConversionOptions, Encoder};

const ADD_FILES_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::A);
const REMOVE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
const ADD_FOLDER_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::F);

/// Main application state.
pub struct ConverterApp {
    /// Files queued for conversion
    files: FileList,
    /// List rows currently highlighted
    selected: BTreeSet<usize>,
    /// Conversion settings
    options: ConversionOptions,
    /// Handle to the batch in flight, if any
    batch: Option<BatchHandle>,
    /// Last reported progress, 0..=100
    progress: u8,
    /// Status bar text
    status: String,
    /// Where ffmpeg was found at startup, if anywhere
    encoder_path: Option<PathBuf>,
    show_help: bool,
    show_about: bool,
}

impl Default for ConverterApp {
    fn default() -> Self {
        Self {
            files: FileList::new(),
            selected: BTreeSet::new(),
            options: ConversionOptions::default(),
            batch: None,
            progress: 0,
            status: "Ready".to_string(),
            encoder_path: None,
            show_help: false,
            show_about: false,
        }
    }
}

impl ConverterApp {
    /// Create the application, locating the encoder once.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        app.encoder_path = Encoder::locate();
        match &app.encoder_path {
            Some(path) => log::info!("Found ffmpeg at {}", path.display()),
            None => log::warn!("ffmpeg not found in PATH or common install locations"),
        }
        app
    }

    fn is_running(&self) -> bool {
        self.batch.is_some()
    }

    /// Apply any events the worker has produced since the last frame.
    fn poll_batch(&mut self) {
        let events = match &self.batch {
            Some(batch) => batch.poll_events(),
            None => return,
        };

        for event in events {
            if let Some(notice) = self.apply_event(event) {
                notice.show();
            }
        }
    }

    /// Fold one batch event into the displayed state, returning the
    /// modal notice to raise for it, if any. Terminal events drop the
    /// handle; a fatal error leaves the status line and progress bar
    /// at the last completed step.
    fn apply_event(&mut self, event: BatchEvent) -> Option<Notice> {
        match event {
            BatchEvent::ValidationError(reason) => {
                self.status = reason.clone();
                self.batch = None;
                Some(Notice::error(reason))
            }
            BatchEvent::Started { total } => {
                self.progress = 0;
                self.status = format!("Start conversion ... ({} files)", total);
                None
            }
            BatchEvent::Progress { percent, message } => {
                self.progress = percent;
                self.status = message;
                None
            }
            BatchEvent::FatalError(message) => {
                self.batch = None;
                Some(Notice::error(message))
            }
            BatchEvent::Completed => {
                self.progress = 100;
                self.status = "Conversion completed!".to_string();
                self.batch = None;
                Some(Notice::success("Conversion completed!"))
            }
            BatchEvent::Cancelled => {
                self.status = "Conversion cancelled".to_string();
                self.batch = None;
                None
            }
        }
    }

    /// Snapshot the list and settings and hand them to a new worker.
    fn start_conversion(&mut self) {
        if self.is_running() {
            return;
        }

        // The startup lookup only feeds the warning banner; a missing
        // binary at this point surfaces as a fatal event from the run.
        let program = self
            .encoder_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("ffmpeg"));

        self.batch = Some(start_batch(
            self.files.to_vec(),
            self.options.clone(),
            Encoder::new(program),
        ));
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&ADD_FILES_SHORTCUT)) {
            self.open_file_dialog();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&REMOVE_SHORTCUT)) {
            self.remove_selected();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&ADD_FOLDER_SHORTCUT)) {
            self.open_folder_dialog();
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let add = egui::Button::new("Add Video")
                        .shortcut_text(ctx.format_shortcut(&ADD_FILES_SHORTCUT));
                    if ui.add(add).clicked() {
                        self.open_file_dialog();
                        ui.close_menu();
                    }

                    let remove = egui::Button::new("Remove Video")
                        .shortcut_text(ctx.format_shortcut(&REMOVE_SHORTCUT));
                    if ui.add(remove).clicked() {
                        self.remove_selected();
                        ui.close_menu();
                    }

                    let add_folder = egui::Button::new("Add Video from Folder")
                        .shortcut_text(ctx.format_shortcut(&ADD_FOLDER_SHORTCUT));
                    if ui.add(add_folder).clicked() {
                        self.open_folder_dialog();
                        ui.close_menu();
                    }

                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("How to Use").clicked() {
                        self.show_help = true;
                        ui.close_menu();
                    }
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} file(s) queued", self.files.len()));
                });
            });
        });
    }

    fn show_encoder_warning(&mut self, ui: &mut egui::Ui) {
        if self.encoder_path.is_some() {
            return;
        }
        ui.horizontal(|ui| {
            ui.label(RichText::new("⚠").color(Color32::YELLOW));
            ui.label(
                RichText::new("FFmpeg not found. Make sure it is installed and added to PATH.")
                    .color(Color32::YELLOW)
                    .small(),
            );
        });
        ui.separator();
    }

    fn show_file_list(&mut self, ui: &mut egui::Ui) {
        ui.label("Video Files:");

        let list_height = (ui.available_height() - 240.0).max(120.0);
        egui::ScrollArea::both()
            .max_height(list_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.files.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new("Drop video files here or click Add File")
                                .italics()
                                .color(Color32::GRAY),
                        );
                    });
                    return;
                }

                let mut toggled = None;
                for (index, path) in self.files.files().iter().enumerate() {
                    let is_selected = self.selected.contains(&index);
                    let row = RichText::new(path.display().to_string()).monospace().small();
                    if ui.selectable_label(is_selected, row).clicked() {
                        toggled = Some(index);
                    }
                }
                if let Some(index) = toggled {
                    if !self.selected.remove(&index) {
                        self.selected.insert(index);
                    }
                }
            });

        self.handle_dropped_files(ui);
    }

    fn show_list_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add File").clicked() {
                self.open_file_dialog();
            }

            ui.add_enabled_ui(!self.selected.is_empty(), |ui| {
                if ui.button("Remove").clicked() {
                    self.remove_selected();
                }
            });

            if ui.button("Add Folder").clicked() {
                self.open_folder_dialog();
            }
        });

        ui.checkbox(
            &mut self.options.keep_subfolder_structure,
            "Keep Subfolder Structure",
        );
    }

    fn show_output_settings(&mut self, ui: &mut egui::Ui) {
        ui.label("Output Folder:");
        ui.label(RichText::new(self.options.output_dir.display().to_string()).monospace());
        if ui.button("Select Output Folder").clicked() {
            self.select_output_folder();
        }

        ui.add_space(4.0);
        ui.label("Select Bitrate:");
        egui::ComboBox::from_id_source("bitrate_choice")
            .selected_text(self.options.bitrate.display_name())
            .show_ui(ui, |ui| {
                for bitrate in Bitrate::all() {
                    ui.selectable_value(
                        &mut self.options.bitrate,
                        *bitrate,
                        bitrate.display_name(),
                    );
                }
            });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_enabled_ui(!self.is_running(), |ui| {
                if ui.button("Convert Videos to MP3").clicked() {
                    self.start_conversion();
                }
            });

            ui.add_enabled_ui(self.is_running(), |ui| {
                if ui.button("Stop").clicked() {
                    if let Some(batch) = &self.batch {
                        batch.cancel();
                    }
                    self.status = "Stopping after current file ...".to_string();
                }
            });
        });

        ui.add_space(4.0);
        let bar = egui::ProgressBar::new(self.progress as f32 / 100.0).show_percentage();
        let bar = if self.is_running() {
            bar.animate(true)
        } else {
            bar
        };
        ui.add(bar);
    }

    /// Handle dropped files.
    fn handle_dropped_files(&mut self, ui: &mut egui::Ui) {
        let dropped: Vec<PathBuf> = ui.ctx().input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        if !dropped.is_empty() {
            let before = self.files.len();
            self.files.extend_from(&DroppedItems(dropped));
            log::info!("Added {} file(s) via drag and drop", self.files.len() - before);
        }

        // Visual feedback for drag
        let is_dragging = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        if is_dragging {
            let painter = ui.painter();
            let rect = ui.max_rect();
            painter.rect_stroke(
                rect,
                4.0,
                egui::Stroke::new(2.0, Color32::from_rgb(100, 200, 255)),
            );
        }
    }

    fn open_file_dialog(&mut self) {
        let extensions: Vec<&str> = supported_extensions().to_vec();
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Video Files", &extensions)
            .pick_files()
        {
            log::info!("Adding {} file(s) from dialog", paths.len());
            self.files.extend_from(&SelectedFiles(paths));
        }
    }

    fn open_folder_dialog(&mut self) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            let before = self.files.len();
            self.files.extend_from(&FolderScan {
                dir: dir.clone(),
                recursive: false,
            });
            log::info!(
                "Added {} file(s) from {}",
                self.files.len() - before,
                dir.display()
            );
        }
    }

    fn select_output_folder(&mut self) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            log::info!("Output folder set to {}", dir.display());
            self.options.output_dir = dir;
        }
    }

    fn remove_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        self.files.remove_selected(&indices);
        self.selected.clear();
        log::info!("Removed {} file(s) from the list", indices.len());
    }

    fn show_help_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("How to Use")
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("1. Add videos with Add File / Add Folder, or drop them onto the list.");
                ui.label("2. Pick an output folder and a bitrate.");
                ui.label("3. Click Convert Videos to MP3.");
                ui.add_space(4.0);
                ui.label("Each video's audio track is written as an MP3 in the output folder.");
            });
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("About")
            .open(&mut self.show_about)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Video to MP3 Converter");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(4.0);
                ui.label("Batch-extracts MP3 audio from video files using FFmpeg.");
            });
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_batch();
        self.handle_shortcuts(ctx);

        self.show_menu_bar(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_encoder_warning(ui);
            self.show_file_list(ui);
            self.show_list_buttons(ui);
            ui.add_space(4.0);
            self.show_output_settings(ui);
            ui.add_space(8.0);
            self.show_controls(ui);
        });

        self.show_help_window(ctx);
        self.show_about_window(ctx);

        // Request repaint while converting
        if self.is_running() {
            ctx.request_repaint();
        }
    }
}

/// A modal message box raised for a batch event.
struct Notice {
    level: rfd::MessageLevel,
    title: &'static str,
    text: String,
}

impl Notice {
    fn error(text: String) -> Self {
        Self {
            level: rfd::MessageLevel::Error,
            title: "Error",
            text,
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            level: rfd::MessageLevel::Info,
            title: "Success",
            text: text.into(),
        }
    }

    fn show(self) {
        rfd::MessageDialog::new()
            .set_level(self.level)
            .set_title(self.title)
            .set_description(&self.text)
            .show();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_error_keeps_last_progress_message() {
        let mut app = ConverterApp::default();
        app.apply_event(BatchEvent::Started { total: 2 });
        app.apply_event(BatchEvent::Progress {
            percent: 50,
            message: "Converted clip.mp4 (1/2)".to_string(),
        });

        let notice = app.apply_event(BatchEvent::FatalError(
            "Failed to spawn FFmpeg process: permission denied".to_string(),
        ));

        assert_eq!(app.status, "Converted clip.mp4 (1/2)");
        assert_eq!(app.progress, 50);
        assert!(app.batch.is_none());
        assert!(notice.is_some());
    }

    #[test]
    fn test_fatal_error_before_any_progress_keeps_start_message() {
        let mut app = ConverterApp::default();
        app.apply_event(BatchEvent::Started { total: 3 });

        let notice = app.apply_event(BatchEvent::FatalError(
            "FFmpeg not found. Make sure it is installed and added to PATH.".to_string(),
        ));

        assert_eq!(app.status, "Start conversion ... (3 files)");
        assert_eq!(app.progress, 0);
        assert_eq!(notice.map(|n| n.title), Some("Error"));
    }

    #[test]
    fn test_completed_sets_final_status_and_success_notice() {
        let mut app = ConverterApp::default();
        app.apply_event(BatchEvent::Started { total: 1 });
        app.apply_event(BatchEvent::Progress {
            percent: 100,
            message: "Converted clip.mp4 (1/1)".to_string(),
        });

        let notice = app.apply_event(BatchEvent::Completed);

        assert_eq!(app.status, "Conversion completed!");
        assert_eq!(app.progress, 100);
        assert_eq!(notice.map(|n| n.title), Some("Success"));
    }
}
