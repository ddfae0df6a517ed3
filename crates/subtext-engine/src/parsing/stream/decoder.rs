use crate::io::IoError;

/// Decodes UTF-8 byte chunks whose boundaries may fall inside a multi-byte
/// char.
///
/// Trailing bytes of an incomplete sequence are held back and prepended to the
/// next chunk. Invalid sequences are reported with their absolute byte offset
/// in the overall input.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    pending: Vec<u8>,
    /// Bytes successfully decoded so far.
    offset: usize,
}

impl Utf8ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes as much of `bytes` (after any held-back bytes) as forms
    /// complete chars.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<String, IoError> {
        self.pending.extend_from_slice(bytes);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) => match e.error_len() {
                // Incomplete sequence at the end: keep it for the next chunk.
                None => e.valid_up_to(),
                Some(_) => {
                    return Err(IoError::InvalidUtf8 {
                        offset: self.offset + e.valid_up_to(),
                    });
                }
            },
        };

        let start = self.offset;
        let rest = self.pending.split_off(valid);
        let decoded = std::mem::replace(&mut self.pending, rest);
        self.offset += valid;
        String::from_utf8(decoded).map_err(|e| IoError::InvalidUtf8 {
            offset: start + e.utf8_error().valid_up_to(),
        })
    }

    /// Ends decoding; held-back bytes at this point are a truncated char.
    pub fn finish(self) -> Result<(), IoError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(IoError::InvalidUtf8 {
                offset: self.offset,
            })
        }
    }
}
