//! External encoder invocation.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use super::job::ConversionJob;
use super::options::Bitrate;

/// Errors raised while launching the encoder.
///
/// An encoder that runs and exits nonzero is not an error here; only
/// failing to launch the process at all is.
#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("FFmpeg not found. Make sure it is installed and added to PATH.")]
    NotFound,
    #[error("Failed to spawn FFmpeg process: {0}")]
    Spawn(std::io::Error),
}

/// Wrapper around the ffmpeg binary.
#[derive(Debug, Clone)]
pub struct Encoder {
    program: PathBuf,
}

impl Encoder {
    /// Wrap a specific program name or path. Resolution happens at
    /// spawn time through the OS.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Search for an installed ffmpeg binary.
    pub fn locate() -> Option<PathBuf> {
        // Check system PATH using which crate
        if let Ok(path) = which::which("ffmpeg") {
            return Some(path);
        }

        // Check common install locations
        let common_paths = if cfg!(target_os = "macos") {
            vec![
                "/usr/local/bin/ffmpeg",
                "/opt/homebrew/bin/ffmpeg",
                "/opt/local/bin/ffmpeg",
            ]
        } else if cfg!(target_os = "windows") {
            vec![
                "C:\\ffmpeg\\bin\\ffmpeg.exe",
                "C:\\Program Files\\ffmpeg\\bin\\ffmpeg.exe",
            ]
        } else {
            vec!["/usr/bin/ffmpeg", "/usr/local/bin/ffmpeg"]
        };

        common_paths
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Run one conversion, blocking until the encoder exits. Encoder
    /// output is discarded; callers inspect the exit status.
    pub fn convert(
        &self,
        job: &ConversionJob,
        bitrate: Bitrate,
    ) -> Result<ExitStatus, EncoderError> {
        let mut cmd = self.command(job, bitrate);

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EncoderError::NotFound
            } else {
                EncoderError::Spawn(e)
            }
        })?;

        child.wait().map_err(EncoderError::Spawn)
    }

    /// Build the encoder command for one job. Arguments are passed as
    /// a discrete vector, never through a shell.
    fn command(&self, job: &ConversionJob, bitrate: Bitrate) -> Command {
        let mut cmd = Command::new(&self.program);

        cmd.arg("-i")
            .arg(&job.input)
            .args([
                "-vn",
                "-ar",
                "44100",
                "-ac",
                "2",
                "-ab",
                bitrate.ffmpeg_arg(),
                "-f",
                "mp3",
            ])
            .arg(&job.output)
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x08000000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        cmd
    }
}
