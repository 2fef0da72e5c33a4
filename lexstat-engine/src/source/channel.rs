//! Words pushed from another thread

use super::{WordResponse, WordSource};
use crate::error::Result;
use std::sync::mpsc::{self, Receiver, Sender};

/// Receives words over a channel; all senders dropped means end-of-stream
#[derive(Debug)]
pub struct ChannelWordSource {
    receiver: Receiver<String>,
    finished: bool,
}

impl ChannelWordSource {
    /// Create a source together with the sender that feeds it
    pub fn new() -> (Sender<String>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self::from_receiver(receiver))
    }

    /// Wrap an existing receiver
    pub fn from_receiver(receiver: Receiver<String>) -> Self {
        Self {
            receiver,
            finished: false,
        }
    }
}

impl WordSource for ChannelWordSource {
    fn next_word(&mut self) -> Result<WordResponse> {
        if self.finished {
            return Ok(WordResponse::eof());
        }
        match self.receiver.recv() {
            Ok(word) => Ok(WordResponse::word(word)),
            Err(_) => {
                self.finished = true;
                Ok(WordResponse::eof())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_disconnect_is_eof() {
        let (sender, mut source) = ChannelWordSource::new();

        let producer = thread::spawn(move || {
            for word in ["Thou", "art."] {
                sender.send(word.to_string()).unwrap();
            }
        });

        assert_eq!(source.next_word().unwrap(), WordResponse::word("Thou"));
        assert_eq!(source.next_word().unwrap(), WordResponse::word("art."));
        assert!(source.next_word().unwrap().eof);
        assert!(source.next_word().unwrap().eof);

        producer.join().unwrap();
    }
}
