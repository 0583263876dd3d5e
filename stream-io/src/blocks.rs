use stream_error::StreamError;

use crate::source::ByteSource;

pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Lazy, forward-only sequence of fixed-size blocks pulled from a
/// [`ByteSource`].
///
/// Short reads are looped until a block fills or the source reports
/// exhaustion, so every emitted block except possibly the last has exactly
/// `block_size` bytes; the last may be shorter but is never empty. A read
/// fault ends iteration after emitting whatever bytes were already
/// accumulated; [`BlockIterator::take_fault`] tells it apart from a clean
/// end-of-stream.
pub struct BlockIterator<S> {
    source: S,
    block_size: usize,
    finished: bool,
    fault: Option<StreamError>,
}

impl<S: ByteSource> BlockIterator<S> {
    pub fn new(source: S, block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be positive");

        Self {
            source,
            block_size,
            finished: false,
            fault: None,
        }
    }

    /// The fault that ended iteration early, if any. `None` after the
    /// iterator is drained means the source hit a clean end-of-stream.
    pub fn take_fault(&mut self) -> Option<StreamError> {
        self.fault.take()
    }

    pub fn source_label(&self) -> &str {
        self.source.label()
    }
}

impl<S: ByteSource> Iterator for BlockIterator<S> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.finished {
            return None;
        }

        let mut block = vec![0u8; self.block_size];
        let mut filled = 0;
        while filled < self.block_size {
            match self.source.read_up_to(&mut block[filled..]) {
                Ok(0) => {
                    self.finished = true;
                    break;
                }
                Ok(count) => filled += count,
                Err(fault) => {
                    log::warn!("{}: {}", self.source.label(), fault);
                    self.fault = Some(fault);
                    self.finished = true;
                    break;
                }
            }
        }

        if filled == 0 {
            None
        } else {
            block.truncate(filled);
            Some(block)
        }
    }
}
