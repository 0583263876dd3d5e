mod blocks;
mod bytes;
mod copy;
mod lines;
mod source;

pub use blocks::{BlockIterator, DEFAULT_BLOCK_SIZE};
pub use bytes::ByteIterator;
pub use copy::{Copier, CopyOptions, Numbering};
pub use lines::{is_blank, LineIterator, DEFAULT_DELIMITER};
pub use source::{ByteSource, FileSource, SliceSource, StdinSource};

#[cfg(test)]
pub(crate) mod testing;
