//! Log setup: every record goes to the log file and to stderr.
//!
//! stdout is never written to, since it carries the MCP protocol.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Env, Target};
use log::warn;

/// Writes everything to two sinks.
pub struct TeeWriter<A, B> {
    primary: A,
    secondary: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.secondary.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

/// Open the log file for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn initialize_logging(log_file: &Path, verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} [PEDIDOS-MCP] {}",
            buf.timestamp_millis(),
            record.level(),
            record.args()
        )
    });

    match open_log_file(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(TeeWriter::new(file, io::stderr()))));
            builder.init();
        }
        Err(e) => {
            builder.target(Target::Stderr);
            builder.init();
            warn!(
                "Could not open log file {}: {}. Logging to stderr only.",
                log_file.display(),
                e
            );
        }
    }
}
