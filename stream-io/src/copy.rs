use std::io::Write;

use data_escape::{transcode, DisplayModes};
use stream_error::Result;

use crate::blocks::{BlockIterator, DEFAULT_BLOCK_SIZE};
use crate::lines::{is_blank, LineIterator, DEFAULT_DELIMITER};
use crate::source::ByteSource;

/// How output lines are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Numbering {
    #[default]
    None,
    /// Every line gets a number, blank or not.
    All,
    /// Blank lines are written unnumbered and do not advance the counter.
    NonBlank,
}

#[derive(Debug, Clone, Copy)]
pub struct CopyOptions {
    pub numbering: Numbering,
    pub modes: DisplayModes,
    /// Collapse runs of consecutive blank lines into a single blank line.
    pub squeeze_blank: bool,
    pub delimiter: u8,
    pub block_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            numbering: Numbering::None,
            modes: DisplayModes::none(),
            squeeze_blank: false,
            delimiter: DEFAULT_DELIMITER,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// Drives one source at a time to a sink, applying the configured
/// transformations.
///
/// The line-number counter and the squeeze state persist across `copy`
/// calls, so a multi-file run numbers lines continuously; call
/// [`Copier::reset`] between sources for per-source numbering.
pub struct Copier {
    next_line_number: u64,
    previous_blank: bool,
}

impl Copier {
    pub fn new() -> Self {
        Self {
            next_line_number: 1,
            previous_blank: false,
        }
    }

    pub fn reset(&mut self) {
        self.next_line_number = 1;
        self.previous_blank = false;
    }

    /// Copy `source` to `sink` under `options`. Writes go out in production
    /// order; a read fault is surfaced as an error only after the bytes read
    /// before it have been written.
    pub fn copy<S, W>(
        &mut self,
        source: S,
        sink: &mut W,
        options: &CopyOptions,
    ) -> Result<()>
    where
        S: ByteSource,
        W: Write,
    {
        if options.numbering == Numbering::None && !options.squeeze_blank {
            self.copy_blocks(source, sink, options)
        } else {
            self.copy_lines(source, sink, options)
        }
    }

    fn copy_blocks<S, W>(
        &mut self,
        source: S,
        sink: &mut W,
        options: &CopyOptions,
    ) -> Result<()>
    where
        S: ByteSource,
        W: Write,
    {
        let mut blocks = BlockIterator::new(source, options.block_size);
        let mut written = 0usize;
        for block in blocks.by_ref() {
            sink.write_all(&transcode(&block, options.modes))?;
            written += block.len();
        }
        log::debug!("{}: copied {} bytes", blocks.source_label(), written);

        match blocks.take_fault() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    fn copy_lines<S, W>(
        &mut self,
        source: S,
        sink: &mut W,
        options: &CopyOptions,
    ) -> Result<()>
    where
        S: ByteSource,
        W: Write,
    {
        let mut lines =
            LineIterator::with_delimiter(source, options.delimiter);
        let mut written = 0usize;
        for line in lines.by_ref() {
            let blank = is_blank(&line, options.delimiter);
            if options.squeeze_blank && blank && self.previous_blank {
                continue;
            }
            self.previous_blank = blank;

            let numbered = match options.numbering {
                Numbering::None => false,
                Numbering::All => true,
                Numbering::NonBlank => !blank,
            };
            if numbered {
                write!(sink, "{:>6}  ", self.next_line_number)?;
                self.next_line_number += 1;
            }

            sink.write_all(&transcode(&line, options.modes))?;
            written += line.len();
        }
        log::debug!("{}: copied {} bytes", lines.source_label(), written);

        match lines.take_fault() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}

impl Default for Copier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;
    use crate::testing::FaultySource;

    fn copy_once(data: &[u8], options: &CopyOptions) -> Vec<u8> {
        let mut sink = Vec::new();
        Copier::new()
            .copy(SliceSource::new(data.to_vec()), &mut sink, options)
            .expect("copy should succeed");
        sink
    }

    #[test]
    fn plain_copy_is_byte_exact() {
        let data = b"a\n\x00\xff no trailing newline";
        assert_eq!(copy_once(data, &CopyOptions::default()), data.to_vec());
    }

    #[test]
    fn numbered_copy_with_visible_tabs() {
        let options = CopyOptions {
            numbering: Numbering::All,
            modes: DisplayModes::none().with_tabs(),
            ..CopyOptions::default()
        };
        assert_eq!(
            copy_once(b"a\n\nb\tc\n", &options),
            b"     1  a\n     2  \n     3  b^Ic\n".to_vec()
        );
    }

    #[test]
    fn nonblank_numbering_skips_blank_lines() {
        let options = CopyOptions {
            numbering: Numbering::NonBlank,
            modes: DisplayModes::none().with_tabs(),
            ..CopyOptions::default()
        };
        assert_eq!(
            copy_once(b"a\n\nb\tc\n", &options),
            b"     1  a\n\n     2  b^Ic\n".to_vec()
        );
    }

    #[test]
    fn final_fragment_is_numbered() {
        let options = CopyOptions {
            numbering: Numbering::All,
            ..CopyOptions::default()
        };
        assert_eq!(
            copy_once(b"a\nb", &options),
            b"     1  a\n     2  b".to_vec()
        );
    }

    #[test]
    fn squeeze_collapses_blank_runs() {
        let options = CopyOptions {
            squeeze_blank: true,
            ..CopyOptions::default()
        };
        assert_eq!(
            copy_once(b"a\n\n\n\nb\n\nc\n", &options),
            b"a\n\nb\n\nc\n".to_vec()
        );
    }

    #[test]
    fn squeeze_combines_with_nonblank_numbering() {
        let options = CopyOptions {
            numbering: Numbering::NonBlank,
            squeeze_blank: true,
            ..CopyOptions::default()
        };
        assert_eq!(
            copy_once(b"a\n\n\nb\n", &options),
            b"     1  a\n\n     2  b\n".to_vec()
        );
    }

    #[test]
    fn counter_continues_across_sources() {
        let options = CopyOptions {
            numbering: Numbering::All,
            ..CopyOptions::default()
        };
        let mut copier = Copier::new();
        let mut sink = Vec::new();

        copier
            .copy(SliceSource::new(b"a\n".to_vec()), &mut sink, &options)
            .unwrap();
        copier
            .copy(SliceSource::new(b"b\n".to_vec()), &mut sink, &options)
            .unwrap();

        assert_eq!(sink, b"     1  a\n     2  b\n".to_vec());
    }

    #[test]
    fn reset_restarts_the_counter() {
        let options = CopyOptions {
            numbering: Numbering::All,
            ..CopyOptions::default()
        };
        let mut copier = Copier::new();
        let mut sink = Vec::new();

        copier
            .copy(SliceSource::new(b"a\n".to_vec()), &mut sink, &options)
            .unwrap();
        copier.reset();
        copier
            .copy(SliceSource::new(b"b\n".to_vec()), &mut sink, &options)
            .unwrap();

        assert_eq!(sink, b"     1  a\n     1  b\n".to_vec());
    }

    #[test]
    fn fault_still_flushes_prefix_bytes() {
        let mut sink = Vec::new();
        let err = Copier::new()
            .copy(
                FaultySource::new(b"partial"),
                &mut sink,
                &CopyOptions::default(),
            )
            .unwrap_err();

        assert_eq!(sink, b"partial".to_vec());
        assert!(err.is_recoverable());
    }

    #[test]
    fn end_of_line_markers_survive_numbering() {
        let options = CopyOptions {
            numbering: Numbering::All,
            modes: DisplayModes::none().with_end_of_line(),
            ..CopyOptions::default()
        };
        assert_eq!(
            copy_once(b"hi\n", &options),
            b"     1  hi$\n".to_vec()
        );
    }
}
