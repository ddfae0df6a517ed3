use std::fs;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::parsing::{
    ParsedDoc,
    blocks::Block,
    serialize::serialize,
    stream::{LineSplitter, Utf8ChunkDecoder},
};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },
}

/// Read a Subtext file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    String::from_utf8(bytes).map_err(|e| IoError::InvalidUtf8 {
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Read and parse a Subtext file in one go
pub fn parse_file(path: &Path) -> Result<ParsedDoc, IoError> {
    let content = read_file(path)?;
    Ok(crate::parsing::parse_document(&content))
}

/// Serialize blocks back to text and write them to `path`
pub fn write_file(path: &Path, blocks: &[Block]) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serialize(blocks))?;
    Ok(())
}

/// Parse everything `reader` yields, `chunk_size` bytes at a time.
///
/// Each block is handed to `on_block` as soon as its line is complete, so
/// large inputs are never held in memory whole. An error from `on_block` stops
/// reading and is returned as is. Returns the number of blocks emitted.
pub fn parse_reader<R, F>(
    mut reader: R,
    chunk_size: usize,
    mut on_block: F,
) -> Result<usize, IoError>
where
    R: Read,
    F: FnMut(Block) -> Result<(), IoError>,
{
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut decoder = Utf8ChunkDecoder::new();
    let mut splitter = LineSplitter::new();
    let mut emitted = 0usize;
    let mut chunks = 0usize;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        chunks += 1;
        let text = decoder.decode(&buf[..n])?;
        for block in splitter.feed(&text) {
            emitted += 1;
            on_block(block)?;
        }
    }

    decoder.finish()?;
    if let Some(block) = splitter.finish() {
        emitted += 1;
        on_block(block)?;
    }

    log::debug!("parsed {emitted} blocks from {chunks} chunks");
    Ok(emitted)
}
