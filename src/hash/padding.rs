//! Message padding and length encoding
//!
//! Implements the padding rule shared by SHA-1 and SHA-2 (FIPS 180-4,
//! section 5.1):
//!
//! 1. a single `0x80` byte is appended to the message tail
//! 2. zero bytes follow until only the length field is left in the block
//! 3. the message length in bits is written big-endian into the length
//!    field (8 bytes for 64-byte blocks, 16 bytes for 128-byte blocks)
//!
//! When the tail leaves no room for the `0x80` byte and the length field,
//! the padding spills into a second, otherwise zero block.

/// The final one or two blocks of a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Padding<const B: usize> {
    blocks: [[u8; B]; 2],
    count: usize,
}

impl<const B: usize> Padding<B> {
    /// The padded blocks, in compression order.
    pub fn blocks(&self) -> &[[u8; B]] {
        &self.blocks[..self.count]
    }

    /// Number of final blocks (1 or 2).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`: padding produces at least one block.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Pads the buffered `tail` of a message.
///
/// # Parameters
/// - `tail`: the bytes left after the last full block (`tail.len() < B`)
/// - `bit_len`: total message length in bits, tail included
/// - `length_field`: size of the length field in bytes (8 or 16)
///
/// # Notes
/// - Only the low `length_field` bytes of `bit_len` are encoded. Callers
///   are responsible for keeping `bit_len` within that range.
pub fn pad<const B: usize>(tail: &[u8], bit_len: u128, length_field: usize) -> Padding<B> {
    debug_assert!(tail.len() < B, "tail must be shorter than a block");
    debug_assert!(length_field == 8 || length_field == 16);

    let mut blocks = [[0u8; B]; 2];
    let rem = tail.len();

    // Copy remaining bytes and append the padding bit (0x80)
    blocks[0][..rem].copy_from_slice(tail);
    blocks[0][rem] = 0x80;

    // Not enough space left for the length field: spill into a second block
    let count = if rem + 1 > B - length_field { 2 } else { 1 };

    let encoded = bit_len.to_be_bytes();
    blocks[count - 1][B - length_field..].copy_from_slice(&encoded[16 - length_field..]);

    Padding { blocks, count }
}
