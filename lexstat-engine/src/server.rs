//! TCP services: the analysis interface and a local word service

use crate::error::{EngineError, Result};
use crate::protocol::{read_message, write_message, Request};
use crate::source::WordResponse;
use lexstat_core::AnalysisReporter;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::io::{self, BufReader, BufWriter};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::thread;

/// Serves analysis reports to any number of concurrent clients
///
/// Every connection gets its own reader thread. A worker from the fixed pool
/// is only taken while a report is computed, so idle connections never hold
/// one. Each request line is answered with one fresh report.
pub struct AnalysisServer {
    listener: TcpListener,
    reporter: AnalysisReporter,
    pool: Arc<ThreadPool>,
}

impl AnalysisServer {
    /// Bind the service with `workers` connection handlers
    pub fn bind(
        address: impl ToSocketAddrs,
        reporter: AnalysisReporter,
        workers: usize,
    ) -> Result<Self> {
        let listener = TcpListener::bind(address)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("lexstat-worker-{i}"))
            .build()
            .map_err(|e| EngineError::Io(io::Error::other(e)))?;

        Ok(Self {
            listener,
            reporter,
            pool: Arc::new(pool),
        })
    }

    /// The bound address
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the listener fails
    pub fn serve(&self) -> Result<()> {
        log::info!("Analysis service listening on {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let reporter = self.reporter.clone();
                    let pool = Arc::clone(&self.pool);
                    thread::Builder::new()
                        .name("lexstat-conn".to_string())
                        .spawn(move || {
                            let peer = stream.peer_addr().ok();
                            if let Err(e) = handle_analysis(stream, &reporter, &pool) {
                                log::warn!("Analysis connection {peer:?} ended with error: {e}");
                            }
                        })?;
                }
                Err(e) => log::warn!("Failed to accept analysis connection: {e}"),
            }
        }
        Ok(())
    }
}

fn handle_analysis(
    stream: TcpStream,
    reporter: &AnalysisReporter,
    pool: &ThreadPool,
) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = BufWriter::new(stream);

    while let Some(Request {}) = read_message(&mut reader)? {
        let result = pool.install(|| reporter.report());
        write_message(&mut writer, &result)?;
    }
    Ok(())
}

/// Serves a fixed word list over the word protocol
///
/// Every connection gets its own cursor starting at the first word and sees
/// end-of-stream after the last one.
pub struct WordServer {
    listener: TcpListener,
    words: Arc<[String]>,
}

impl WordServer {
    /// Bind the service over `words`
    pub fn bind(address: impl ToSocketAddrs, words: Vec<String>) -> Result<Self> {
        Ok(Self {
            listener: TcpListener::bind(address)?,
            words: words.into(),
        })
    }

    /// The bound address
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Number of words served per connection
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the word list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Accept connections until the listener fails
    pub fn serve(&self) -> Result<()> {
        log::info!(
            "Word service listening on {} with {} words",
            self.local_addr()?,
            self.words.len()
        );

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let words = Arc::clone(&self.words);
                    thread::Builder::new()
                        .name("lexstat-feed".to_string())
                        .spawn(move || {
                            if let Err(e) = handle_words(stream, &words) {
                                log::warn!("Word connection ended with error: {e}");
                            }
                        })?;
                }
                Err(e) => log::warn!("Failed to accept word connection: {e}"),
            }
        }
        Ok(())
    }
}

fn handle_words(stream: TcpStream, words: &[String]) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = BufWriter::new(stream);
    let mut cursor = words.iter();

    while let Some(Request {}) = read_message(&mut reader)? {
        let response = match cursor.next() {
            Some(word) => WordResponse::word(word.as_str()),
            None => WordResponse::eof(),
        };
        write_message(&mut writer, &response)?;
    }
    Ok(())
}
