//! Line-delimited JSON framing
//!
//! Every message is one JSON document on one line. Both services answer each
//! request line with exactly one response line. Requests carry no fields, so
//! `{}` is the canonical request.

use crate::error::{EngineError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Read, Write};

/// Empty request accepted by both services
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {}

/// Write one message and flush
pub fn write_message<W: Write, T: Serialize>(writer: &mut W, message: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, message)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Longest accepted message line, newline excluded
pub const MAX_MESSAGE_BYTES: usize = 64 * 1024;

/// Read one message
///
/// Returns `Ok(None)` when the peer closed the connection at a message
/// boundary. Blank lines are skipped. A line longer than
/// [`MAX_MESSAGE_BYTES`] is a [`EngineError::StreamFault`].
pub fn read_message<R: BufRead, T: DeserializeOwned>(reader: &mut R) -> Result<Option<T>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .by_ref()
            .take(MAX_MESSAGE_BYTES as u64 + 1)
            .read_until(b'\n', &mut line)?;
        if read == 0 {
            return Ok(None);
        }
        if line.last() != Some(&b'\n') && line.len() > MAX_MESSAGE_BYTES {
            return Err(EngineError::StreamFault(format!(
                "message exceeds {MAX_MESSAGE_BYTES} bytes"
            )));
        }
        if !line.iter().all(u8::is_ascii_whitespace) {
            return Ok(Some(serde_json::from_slice(&line)?));
        }
    }
}
