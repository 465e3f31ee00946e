//! In-memory stream used by the connection and client tests.

use std::collections::VecDeque;
use std::io;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A scripted `Read + Write` stream.
///
/// Reads replay the scripted chunks one per call (a chunk larger than the
/// caller's buffer is split), then report end of stream. Writes are collected
/// and can be inspected through the handle returned by [`MockStream::written`].
#[derive(Debug, Default)]
pub struct MockStream {
    reads: VecDeque<Result<Vec<u8>, io::ErrorKind>>,
    written: Arc<Mutex<Vec<u8>>>,
    write_error: Option<io::ErrorKind>,
    read_calls: Arc<AtomicUsize>,
}

impl MockStream {
    /// A stream that yields `data` in a single read.
    pub fn new(data: Vec<u8>) -> Self {
        Self::from_chunks([data])
    }

    pub fn from_chunks<I: IntoIterator<Item = Vec<u8>>>(chunks: I) -> Self {
        Self { reads: chunks.into_iter().map(Ok).collect(), ..Default::default() }
    }

    /// Makes the read after all current chunks fail with `kind`.
    pub fn then_fail(mut self, kind: io::ErrorKind) -> Self {
        self.reads.push_back(Err(kind));
        self
    }

    /// Makes every write fail with `kind`.
    pub fn fail_writes(mut self, kind: io::ErrorKind) -> Self {
        self.write_error = Some(kind);
        self
    }

    pub fn written(&self) -> Arc<Mutex<Vec<u8>>> {
        Arc::clone(&self.written)
    }

    pub fn read_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.read_calls)
    }
}

impl Read for MockStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);

        match self.reads.pop_front() {
            None => Ok(0),
            Some(Err(kind)) => Err(io::Error::from(kind)),
            Some(Ok(mut chunk)) => {
                if chunk.len() > buf.len() {
                    let rest = chunk.split_off(buf.len());
                    self.reads.push_front(Ok(rest));
                }
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
        }
    }
}

impl Write for MockStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(kind) = self.write_error {
            return Err(io::Error::from(kind));
        }
        self.written.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
