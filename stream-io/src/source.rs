use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use stream_error::{Result, StreamError};

/// A synchronous byte producer bound to exactly one underlying resource.
///
/// `read_up_to` fills at most `buf.len()` bytes and returns how many were
/// actually available. `Ok(0)` means the source is exhausted (subsequent
/// calls keep returning zero). An `Err` is the out-of-band fault channel:
/// the streaming layer treats it like exhaustion but retains it so callers
/// can tell a clean end-of-stream from an I/O failure. The position only
/// ever advances; sources never rewind.
pub trait ByteSource {
    /// Diagnostic label for error reporting, usually the path.
    fn label(&self) -> &str;

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// File-backed source. The handle is released when the source is dropped,
/// which happens as soon as the owning iterator chain is done with it.
#[derive(Debug)]
pub struct FileSource {
    label: String,
    file: File,
}

impl FileSource {
    /// Open `path` for reading. Failure is reported as
    /// [`StreamError::SourceUnavailable`] so a multi-file run can note the
    /// path and continue with the next one.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            StreamError::SourceUnavailable(
                path.display().to_string(),
                e.to_string(),
            )
        })?;
        log::trace!("opened {}", path.display());

        Ok(Self {
            label: path.display().to_string(),
            file,
        })
    }
}

impl ByteSource for FileSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize> {
        read_retrying(&mut self.file, buf, &self.label)
    }
}

/// Standard-input source. No explicit close beyond process exit.
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSource for StdinSource {
    fn label(&self) -> &str {
        "-"
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut handle = self.stdin.lock();
        read_retrying(&mut handle, buf, "-")
    }
}

/// In-memory source, for tests and callers that already hold the bytes.
pub struct SliceSource {
    data: Vec<u8>,
    position: usize,
}

impl SliceSource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            position: 0,
        }
    }
}

impl ByteSource for SliceSource {
    fn label(&self) -> &str {
        "<memory>"
    }

    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize> {
        let remaining = &self.data[self.position..];
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}

fn read_retrying<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    label: &str,
) -> Result<usize> {
    loop {
        match reader.read(buf) {
            Ok(count) => return Ok(count),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(StreamError::ReadFault(
                    label.to_string(),
                    e.to_string(),
                ))
            }
        }
    }
}
