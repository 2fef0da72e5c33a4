//! Client for the analysis interface

use crate::error::{EngineError, Result};
use crate::protocol::{read_message, write_message, Request};
use lexstat_core::AnalysisResult;
use std::io::{self, BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

/// Connection to an [`AnalysisServer`](crate::AnalysisServer)
#[derive(Debug)]
pub struct AnalysisClient {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl AnalysisClient {
    /// Connect to the analysis service
    pub fn connect(address: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(address)?;
        Ok(Self {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
        })
    }

    /// Request the current analysis
    pub fn get_analysis(&mut self) -> Result<AnalysisResult> {
        write_message(&mut self.writer, &Request {})?;
        read_message(&mut self.reader)?.ok_or_else(|| {
            EngineError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "analysis service closed the connection",
            ))
        })
    }
}
