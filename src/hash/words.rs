//! Big-endian word packing shared by all algorithm families.
//!
//! SHA-1 and SHA-256 operate on 32-bit words, SHA-512 on 64-bit words. Both
//! read message blocks and write their final state in big-endian order.

/// A state or message word of one of the SHA families.
pub trait Word: Copy {
    /// Width of the word in bytes.
    const BYTES: usize;

    /// Reads a word from exactly `Self::BYTES` big-endian bytes.
    fn read_be(bytes: &[u8]) -> Self;

    /// Writes the word into exactly `Self::BYTES` bytes, big-endian.
    fn write_be(self, out: &mut [u8]);
}

impl Word for u32 {
    const BYTES: usize = 4;

    #[inline(always)]
    fn read_be(bytes: &[u8]) -> Self {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

impl Word for u64 {
    const BYTES: usize = 8;

    #[inline(always)]
    fn read_be(bytes: &[u8]) -> Self {
        u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }

    #[inline(always)]
    fn write_be(self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_be_bytes());
    }
}

/// Unpacks the first 16 big-endian words of a message block.
#[inline(always)]
pub(crate) fn load_block<W: Word + Default>(block: &[u8]) -> [W; 16] {
    let mut w = [W::default(); 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *slot = W::read_be(chunk);
    }

    w
}

/// Serializes `words` big-endian into the front of `out`.
///
/// Returns the number of bytes written.
pub(crate) fn store_words<W: Word>(words: &[W], out: &mut [u8]) -> usize {
    for (chunk, word) in out.chunks_exact_mut(W::BYTES).zip(words) {
        word.write_be(chunk);
    }

    words.len() * W::BYTES
}
