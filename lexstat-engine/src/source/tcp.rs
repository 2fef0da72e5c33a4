//! Remote word source over TCP

use super::{WordResponse, WordSource};
use crate::error::{EngineError, Result};
use crate::protocol::{read_message, write_message, Request};
use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

#[derive(Debug)]
struct Connection {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

/// Client for a remote word service speaking the line protocol
///
/// Built with [`TcpWordSource::new`], the connection is only opened on the
/// first pull, so an unreachable service fails the ingestion run rather than
/// the caller.
#[derive(Debug)]
pub struct TcpWordSource {
    address: String,
    timeout: Option<Duration>,
    connection: Option<Connection>,
}

impl TcpWordSource {
    /// A source that connects to `address` on first use
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            timeout: None,
            connection: None,
        }
    }

    /// Bound how long each connection attempt may take
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Connect to the word service at `address` immediately
    pub fn connect(address: &str) -> Result<Self> {
        let mut source = Self::new(address);
        source.ensure_connected()?;
        Ok(source)
    }

    /// Connect immediately, bounding each connection attempt
    pub fn connect_timeout(address: &str, timeout: Duration) -> Result<Self> {
        let mut source = Self::new(address).with_timeout(timeout);
        source.ensure_connected()?;
        Ok(source)
    }

    /// Address of the word service
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Whether a connection is open
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    fn ensure_connected(&mut self) -> Result<&mut Connection> {
        if self.connection.is_none() {
            let stream = self.open_stream()?;
            let reader = stream.try_clone().map_err(|e| self.unavailable(e.to_string()))?;
            log::info!("Connected to word source at {}", self.address);
            self.connection = Some(Connection {
                reader: BufReader::new(reader),
                writer: BufWriter::new(stream),
            });
        }
        self.connection
            .as_mut()
            .ok_or_else(|| EngineError::StreamFault("connection unexpectedly missing".to_string()))
    }

    fn open_stream(&self) -> Result<TcpStream> {
        let Some(timeout) = self.timeout else {
            return TcpStream::connect(&self.address).map_err(|e| self.unavailable(e.to_string()));
        };

        let addrs = self
            .address
            .to_socket_addrs()
            .map_err(|e| self.unavailable(e.to_string()))?;
        let mut last_error = "no addresses resolved".to_string();
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => return Ok(stream),
                Err(e) => last_error = e.to_string(),
            }
        }
        Err(self.unavailable(last_error))
    }

    fn unavailable(&self, reason: String) -> EngineError {
        EngineError::SourceUnavailable {
            address: self.address.clone(),
            reason,
        }
    }
}

impl WordSource for TcpWordSource {
    fn next_word(&mut self) -> Result<WordResponse> {
        let fault = |e: EngineError| EngineError::StreamFault(e.to_string());

        let connection = self.ensure_connected()?;
        write_message(&mut connection.writer, &Request {}).map_err(fault)?;
        match read_message(&mut connection.reader).map_err(fault)? {
            Some(response) => Ok(response),
            None => {
                self.connection = None;
                Err(EngineError::StreamFault(format!(
                    "{} closed the connection mid-stream",
                    self.address
                )))
            }
        }
    }
}
