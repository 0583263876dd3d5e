use stream_error::{Result, StreamError};

use crate::source::ByteSource;

/// Yields one byte per read call, exercising the short-read looping of the
/// block layer.
pub struct DribbleSource {
    data: Vec<u8>,
    position: usize,
}

impl DribbleSource {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            position: 0,
        }
    }
}

impl ByteSource for DribbleSource {
    fn label(&self) -> &str {
        "<dribble>"
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.position >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.position];
        self.position += 1;
        Ok(1)
    }
}

/// Serves `prefix`, then fails every subsequent read.
pub struct FaultySource {
    prefix: Vec<u8>,
    position: usize,
}

impl FaultySource {
    pub fn new(prefix: &[u8]) -> Self {
        Self {
            prefix: prefix.to_vec(),
            position: 0,
        }
    }
}

impl ByteSource for FaultySource {
    fn label(&self) -> &str {
        "<faulty>"
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize> {
        let remaining = &self.prefix[self.position..];
        if remaining.is_empty() {
            return Err(StreamError::ReadFault(
                "<faulty>".to_string(),
                "injected fault".to_string(),
            ));
        }
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}
