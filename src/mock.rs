//! Mock streams for tests.
use std::cmp;
use std::io::{self, Read, Write};

/// An in-memory stream: reads come from a scripted input, writes are kept
/// for inspection.
#[derive(Clone, Debug, Default)]
pub struct MockStream {
    pub read: Vec<u8>,
    pub pos: usize,
    pub write: Vec<u8>,
}

impl MockStream {
    pub fn new() -> MockStream {
        MockStream::default()
    }

    pub fn with_input(input: &[u8]) -> MockStream {
        MockStream {
            read: input.to_vec(),
            pos: 0,
            write: Vec::new(),
        }
    }
}

impl Read for MockStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.read[self.pos..];
        let n = cmp::min(buf.len(), remaining.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for MockStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
