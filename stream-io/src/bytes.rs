use stream_error::StreamError;

use crate::blocks::{BlockIterator, DEFAULT_BLOCK_SIZE};
use crate::source::ByteSource;

/// Flattens the blocks of a [`BlockIterator`] into a lazy sequence of single
/// bytes. The next block is not pulled until the current one is drained.
pub struct ByteIterator<S> {
    blocks: BlockIterator<S>,
    current: Vec<u8>,
    position: usize,
}

impl<S: ByteSource> ByteIterator<S> {
    pub fn new(source: S) -> Self {
        Self::with_block_size(source, DEFAULT_BLOCK_SIZE)
    }

    pub fn with_block_size(source: S, block_size: usize) -> Self {
        Self {
            blocks: BlockIterator::new(source, block_size),
            current: Vec::new(),
            position: 0,
        }
    }

    pub fn take_fault(&mut self) -> Option<StreamError> {
        self.blocks.take_fault()
    }

    pub fn source_label(&self) -> &str {
        self.blocks.source_label()
    }
}

impl<S: ByteSource> Iterator for ByteIterator<S> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.position >= self.current.len() {
            self.current = self.blocks.next()?;
            self.position = 0;
        }
        let byte = self.current[self.position];
        self.position += 1;
        Some(byte)
    }
}
