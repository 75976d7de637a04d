//! Log setup for the command-line tool
//!
//! Messages go to stderr. A run that writes output also keeps a copy of its
//! log next to the processed files, named `run-log-<timestamp>.txt`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::LevelFilter;

use crate::error::{Error, Result};

/// File name of the run log for a run started at `started`.
pub fn run_log_file_name(started: DateTime<Local>) -> String {
    format!("run-log-{}.txt", started.format("%y-%m-%d-%H%M%S"))
}

/// Create (or append to) the run log inside `output_dir`.
pub fn open_run_log(output_dir: &Path, started: DateTime<Local>) -> Result<(PathBuf, File)> {
    fs::create_dir_all(output_dir).map_err(|e| Error::Write {
        path: output_dir.to_path_buf(),
        message: format!("failed to create directory: {}", e),
    })?;
    let path = output_dir.join(run_log_file_name(started));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| Error::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;
    Ok((path, file))
}

/// Writes everything to stderr and, when present, to a run log file.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger.
///
/// `level` is one of error, warn, info, debug or trace; anything else falls
/// back to info. `RUST_LOG` still applies on top of it.
pub fn init(level: &str, run_log: Option<File>) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Pipe(Box::new(Tee { file: run_log })))
        .try_init();
}
