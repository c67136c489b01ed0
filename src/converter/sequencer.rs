//! Sequential batch conversion worker.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};

use super::encoder::Encoder;
use super::job::ConversionJob;
use super::options::ConversionOptions;

/// Events from the batch worker, in the order the UI applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// The run was rejected before any work started.
    ValidationError(String),
    /// The run was accepted; `total` files will be attempted.
    Started { total: usize },
    /// One file finished, successfully or not.
    Progress { percent: u8, message: String },
    /// The encoder could not be launched; the run is over.
    FatalError(String),
    /// The whole list was processed.
    Completed,
    /// The run was stopped between files at the user's request.
    Cancelled,
}

/// Handle to a running batch.
pub struct BatchHandle {
    events: Receiver<BatchEvent>,
    cancel_flag: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl BatchHandle {
    /// Drain any events the worker has produced (non-blocking).
    pub fn poll_events(&self) -> Vec<BatchEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    /// Ask the worker to stop before the next file. The file being
    /// converted is left to finish.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }
}

impl Drop for BatchHandle {
    fn drop(&mut self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Launch one conversion run over a snapshot of its inputs.
///
/// Exactly one terminal event is delivered per call: `ValidationError`
/// with nothing before it, or `Started` eventually followed by
/// `FatalError`, `Cancelled`, or `Completed`. Each finished file adds
/// one `Progress` event in between.
pub fn start_batch(
    files: Vec<PathBuf>,
    options: ConversionOptions,
    encoder: Encoder,
) -> BatchHandle {
    let (event_tx, event_rx) = bounded::<BatchEvent>(64);
    let cancel_flag = Arc::new(AtomicBool::new(false));

    if let Some(reason) = validate(&files, &options) {
        log::warn!("Conversion rejected: {}", reason);
        let _ = event_tx.send(BatchEvent::ValidationError(reason.to_string()));
        return BatchHandle {
            events: event_rx,
            cancel_flag,
            worker: None,
        };
    }

    let worker_flag = Arc::clone(&cancel_flag);
    let worker = thread::spawn(move || {
        worker_loop(files, options, encoder, worker_flag, event_tx);
    });

    BatchHandle {
        events: event_rx,
        cancel_flag,
        worker: Some(worker),
    }
}

fn validate(files: &[PathBuf], options: &ConversionOptions) -> Option<&'static str> {
    if files.is_empty() {
        Some("No files selected for conversion.")
    } else if options.output_dir.as_os_str().is_empty() {
        Some("No output folder selected.")
    } else {
        None
    }
}

/// Worker thread main loop. Converts one file at a time, waiting for
/// each encoder process to exit before starting the next.
fn worker_loop(
    files: Vec<PathBuf>,
    options: ConversionOptions,
    encoder: Encoder,
    cancel_flag: Arc<AtomicBool>,
    event_tx: Sender<BatchEvent>,
) {
    let total = files.len();
    let _ = event_tx.send(BatchEvent::Started { total });
    log::info!("Starting conversion of {} file(s)", total);

    for (index, input) in files.into_iter().enumerate() {
        if cancel_flag.load(Ordering::Relaxed) {
            log::info!("Conversion cancelled after {} of {} file(s)", index, total);
            let _ = event_tx.send(BatchEvent::Cancelled);
            return;
        }

        let job = ConversionJob::new(input, &options.output_dir);
        let filename = job.input_filename();

        match encoder.convert(&job, options.bitrate) {
            Ok(status) => {
                if !status.success() {
                    log::warn!("Encoder exited with {} for {}", status, filename);
                }
            }
            Err(e) => {
                log::error!("Encoder launch failed: {}", e);
                let _ = event_tx.send(BatchEvent::FatalError(e.to_string()));
                return;
            }
        }

        let done = index + 1;
        let percent = (100.0 * done as f64 / total as f64).round() as u8;
        let _ = event_tx.send(BatchEvent::Progress {
            percent,
            message: format!("Converted {} ({}/{})", filename, done, total),
        });
    }

    log::info!("Conversion batch complete");
    let _ = event_tx.send(BatchEvent::Completed);
}
