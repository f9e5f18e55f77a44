//! File-backed byte source.

use std::fs::File;
use std::io;
use std::path::Path;

use super::ByteSource;
use crate::error::EtagError;

/// An open file whose length was captured when it was opened.
///
/// Reads are positional (`pread` on unix, `ReadFile` with an offset on
/// windows) and never move a shared cursor, so one `FileSource` can serve
/// many workers at once.
#[derive(Debug)]
pub struct FileSource {
    file: File,
    size: u64,
}

impl FileSource {
    /// Opens `path` and records its current length.
    ///
    /// # Errors
    ///
    /// Returns [`EtagError::SourceUnavailable`] if the file cannot be opened
    /// or its metadata cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EtagError> {
        let path = path.as_ref();
        let unavailable = |source| EtagError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let size = file.metadata().map_err(unavailable)?.len();
        Ok(Self { file, size })
    }

    /// Wraps an already open file, reading its length now.
    pub fn from_file(file: File) -> io::Result<Self> {
        let size = file.metadata()?.len();
        Ok(Self { file, size })
    }
}

impl ByteSource for FileSource {
    fn size(&self) -> u64 {
        self.size
    }

    #[cfg(unix)]
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        std::os::unix::fs::FileExt::read_at(&self.file, buf, offset)
    }

    #[cfg(windows)]
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        std::os::windows::fs::FileExt::seek_read(&self.file, buf, offset)
    }
}
