use bytemuck::{cast_slice, cast_slice_mut};

use crate::utils::error::KernelError;

/// Host buffer. Backed by 8-byte words so any `Element` view is aligned.
pub struct CpuData {
    words: Box<[u64]>,
    len_bytes: usize,
}

impl CpuData {
    /// Allocate a zero-filled buffer of `len_bytes` bytes.
    pub fn zeroed(len_bytes: usize) -> Result<Self, KernelError> {
        let num_words = len_bytes.div_ceil(std::mem::size_of::<u64>());
        let mut words: Vec<u64> = Vec::new();
        words.try_reserve_exact(num_words).map_err(|e| {
            KernelError::Allocation(format!("failed to allocate {} bytes: {}", len_bytes, e))
        })?;
        words.resize(num_words, 0);

        Ok(Self {
            words: words.into_boxed_slice(),
            len_bytes,
        })
    }

    pub fn len_bytes(&self) -> usize {
        self.len_bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        &cast_slice::<u64, u8>(&self.words)[..self.len_bytes]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut cast_slice_mut::<u64, u8>(&mut self.words)[..self.len_bytes]
    }
}
