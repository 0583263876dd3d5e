use stream_error::StreamError;

use crate::bytes::ByteIterator;
use crate::source::ByteSource;

pub const DEFAULT_DELIMITER: u8 = 0x0a;

/// True for the empty line and for a line that is exactly one delimiter
/// byte. This is the blank-line test used by non-blank numbering and
/// blank-line squeezing.
pub fn is_blank(line: &[u8], delimiter: u8) -> bool {
    line.is_empty() || line == [delimiter]
}

/// Groups a byte sequence into lines. Each line includes its terminating
/// delimiter; the final line may be an undelimited trailing fragment.
pub struct LineIterator<S> {
    bytes: ByteIterator<S>,
    delimiter: u8,
}

impl<S: ByteSource> LineIterator<S> {
    pub fn new(source: S) -> Self {
        Self::with_delimiter(source, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(source: S, delimiter: u8) -> Self {
        Self {
            bytes: ByteIterator::new(source),
            delimiter,
        }
    }

    pub fn take_fault(&mut self) -> Option<StreamError> {
        self.bytes.take_fault()
    }

    pub fn source_label(&self) -> &str {
        self.bytes.source_label()
    }
}

impl<S: ByteSource> Iterator for LineIterator<S> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let mut line = Vec::new();
        for byte in self.bytes.by_ref() {
            line.push(byte);
            if byte == self.delimiter {
                break;
            }
        }

        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}
