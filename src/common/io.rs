use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

/// Input bytes, either mapped or read into memory.
pub enum FileData {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Deref for FileData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FileData::Mmap(m) => m,
            FileData::Owned(v) => v,
        }
    }
}

/// Number lists below this size are read rather than mapped.
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Read a file, mapping regular files of at least 1 MiB.
pub fn read_file(path: &Path) -> io::Result<FileData> {
    let mut file = File::open(path)?;
    let metadata = file.metadata()?;

    if metadata.file_type().is_file() && metadata.len() >= MMAP_THRESHOLD {
        // SAFETY: read-only mapping of a regular file we just opened.
        if let Ok(mmap) = unsafe { Mmap::map(&file) } {
            return Ok(FileData::Mmap(mmap));
        }
    }

    let mut buf = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut buf)?;
    Ok(FileData::Owned(buf))
}

/// Read a named input, treating `-` as standard input.
pub fn read_input(name: &str) -> io::Result<FileData> {
    if name == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(FileData::Owned(buf))
    } else {
        read_file(Path::new(name))
    }
}
