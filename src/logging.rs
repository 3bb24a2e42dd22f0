//! Log capture while the picker owns the terminal.
//!
//! Anything written to stderr during the interactive session would land on
//! the alternate screen and vanish. Events are buffered in memory instead and
//! copied to stderr once the [`LogGuard`] returned by [`initialize`] drops.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;

/// Shared in-memory sink for formatted log lines.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
	bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
	/// Take everything buffered so far, leaving the buffer empty.
	pub fn take(&self) -> Vec<u8> {
		let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
		std::mem::take(&mut *bytes)
	}
}

impl Write for LogBuffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
		bytes.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Copies buffered log output to stderr when dropped.
#[must_use = "logs are only written out when the guard drops"]
#[derive(Debug)]
pub struct LogGuard {
	buffer: LogBuffer,
}

impl LogGuard {
	/// Write buffered output to stderr now.
	pub fn flush(&self) -> io::Result<()> {
		let bytes = self.buffer.take();
		if bytes.is_empty() {
			return Ok(());
		}
		let mut stderr = io::stderr().lock();
		stderr.write_all(&bytes)?;
		stderr.flush()
	}
}

impl Drop for LogGuard {
	fn drop(&mut self) {
		let _ = self.flush();
	}
}

/// Default verbosity: everything in debug builds, warnings and up otherwise.
pub fn default_level() -> LevelFilter {
	if cfg!(debug_assertions) {
		LevelFilter::DEBUG
	} else {
		LevelFilter::WARN
	}
}

/// Install the global subscriber, buffering output until the guard drops.
pub fn initialize() -> Result<LogGuard> {
	let buffer = LogBuffer::default();
	let writer = buffer.clone();

	tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_max_level(default_level())
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(LogGuard { buffer })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn buffer_collects_writes_until_taken() {
		let mut buffer = LogBuffer::default();
		buffer.write_all(b"first\n").expect("write");
		buffer.clone().write_all(b"second\n").expect("write through clone");

		assert_eq!(buffer.take(), b"first\nsecond\n");
		assert!(buffer.take().is_empty());
	}

	#[test]
	fn scoped_subscriber_writes_into_buffer() {
		let buffer = LogBuffer::default();
		let writer = buffer.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_writer(move || writer.clone())
			.with_max_level(LevelFilter::DEBUG)
			.with_ansi(false)
			.finish();

		tracing::subscriber::with_default(subscriber, || {
			tracing::debug!(query = "smi", "applied input");
		});

		let output = String::from_utf8(buffer.take()).expect("utf8 log output");
		assert!(output.contains("applied input"), "unexpected log output: {output}");
		assert!(output.contains("query=\"smi\""), "unexpected log output: {output}");
	}

	#[test]
	fn initialize_routes_events_into_the_guard_buffer() {
		let guard = initialize().expect("first subscriber install");
		tracing::warn!(candidate = "smile", "value missing from catalog");

		let output = String::from_utf8(guard.buffer.take()).expect("utf8 log output");
		assert!(output.contains("WARN"), "unexpected log output: {output}");
		assert!(output.contains("value missing from catalog"), "unexpected log output: {output}");
		assert!(!output.contains("\x1b["), "log output must not carry colour codes: {output}");

		let err = initialize().expect_err("global subscriber is already installed");
		assert!(err.to_string().starts_with("failed to install log subscriber"));
	}

	#[test]
	fn guard_flush_drains_the_buffer() {
		let guard = LogGuard {
			buffer: LogBuffer::default(),
		};
		guard.buffer.clone().write_all(b"warning\n").expect("write");

		guard.flush().expect("flush to stderr");
		assert!(guard.buffer.take().is_empty());
	}
}
