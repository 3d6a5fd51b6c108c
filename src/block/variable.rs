use crate::common::Result;

/// The append-only byte stream holding expansions of variable-length cells.
/// `offset` recorded in the fixed region is always `size()` at the moment a
/// value's payload begins, since nothing is ever inserted except at the
/// end.
#[derive(Debug, Default)]
pub struct VariableRegionWriter {
    buf: Vec<u8>,
}

impl VariableRegionWriter {
    pub fn with_capacity(bytes: usize) -> VariableRegionWriter {
        VariableRegionWriter {
            buf: Vec::with_capacity(bytes),
        }
    }

    pub fn offset(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Appends `bytes` and returns the offset they were written at. Returns
    /// `IOFailure` if the region cannot be grown; in practice the backing
    /// `Vec<u8>` only fails this way on allocation exhaustion, but the
    /// `Result` keeps the interface honest about that possibility.
    pub fn append(&mut self, bytes: &[u8]) -> Result<u32> {
        let offset = self.offset();
        self.buf.try_reserve(bytes.len()).map_err(|e| {
            crate::common::Error::IOFailure(format!("variable region growth failed: {e}"))
        })?;
        self.buf.extend_from_slice(bytes);
        Ok(offset)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
