use std::io::Write;
use std::path::{Path, PathBuf};

use stream_error::Result;
use stream_io::{Copier, CopyOptions, FileSource, StdinSource};

/// Copy every path to `sink` in order, `-` meaning standard input.
///
/// A path that cannot be opened or read is reported on stderr and the run
/// continues with the next one; already-written output stays written.
/// Returns true only if every source was copied cleanly, which is what the
/// exit code is computed from.
pub fn concatenate<W: Write>(
    paths: &[PathBuf],
    options: &CopyOptions,
    sink: &mut W,
) -> bool {
    let mut copier = Copier::new();
    let mut clean = true;

    for path in paths {
        if let Err(e) = copy_path(path, &mut copier, options, sink) {
            log::error!("{}", e);
            eprintln!("bytecat: {}", e);
            clean = false;
        }
    }

    clean
}

fn copy_path<W: Write>(
    path: &Path,
    copier: &mut Copier,
    options: &CopyOptions,
    sink: &mut W,
) -> Result<()> {
    if path.as_os_str() == "-" {
        copier.copy(StdinSource::new(), sink, options)
    } else {
        copier.copy(FileSource::open(path)?, sink, options)
    }
}
