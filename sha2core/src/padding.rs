//! Message padding: splits an in-memory message into the 64-byte blocks fed to the compression
//! function, appending the `1` marker bit, zero fill and the 64-bit big-endian bit length.

use std::fmt;
use std::iter::FusedIterator;

use crate::consts::{BLOCK_LEN, LENGTH_LEN};

/// One message block, as consumed by the compression function.
pub type Block = [u8; BLOCK_LEN];

/// Byte carrying the single `1` bit appended right after the message.
const MARKER: u8 = 0b1000_0000;

/// Offset of the length trailer inside the final block.
const TRAILER_OFFSET: usize = BLOCK_LEN - LENGTH_LEN;

/// Cursor over a message, producing its padded blocks one at a time.
///
/// Full blocks are copied verbatim from the message. The tail is copied into a block followed by
/// the marker byte and zero fill; the length trailer closes that block when at least
/// `LENGTH_LEN` bytes are left in it, otherwise it goes into one extra block made of zero fill
/// and the trailer only. Once the trailer has been produced the cursor is exhausted for good.
#[derive(Clone)]
pub struct Chunker<'a> {
    remaining: &'a [u8],
    total_len: u64,
    marker_emitted: bool,
    trailer_emitted: bool,
}

impl<'a> Chunker<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Chunker {
            remaining: data,
            total_len: data.len() as u64,
            marker_emitted: false,
            trailer_emitted: false,
        }
    }

    /// Number of blocks produced for a message of `len` bytes.
    pub fn block_count(len: u64) -> u64 {
        len / BLOCK_LEN as u64 + tail_blocks(len as usize % BLOCK_LEN)
    }

    /// Returns true once the length trailer has been produced.
    pub fn is_finished(&self) -> bool {
        self.trailer_emitted
    }

    /// Writes the next block into `block`.
    ///
    /// Returns `false`, leaving `block` untouched, when all blocks have been produced.
    pub fn next_block(&mut self, block: &mut Block) -> bool {
        if self.trailer_emitted {
            return false;
        }

        if self.remaining.len() >= BLOCK_LEN {
            let (head, tail) = self.remaining.split_at(BLOCK_LEN);
            block.copy_from_slice(head);
            self.remaining = tail;
            return true;
        }

        let mut pos = self.remaining.len();
        block[..pos].copy_from_slice(self.remaining);
        self.remaining = &[];

        // At least one byte is free here: the tail is shorter than a block.
        if !self.marker_emitted {
            block[pos] = MARKER;
            pos += 1;
            self.marker_emitted = true;
        }

        if BLOCK_LEN - pos >= LENGTH_LEN {
            block[pos..TRAILER_OFFSET].fill(0);
            block[TRAILER_OFFSET..].copy_from_slice(&bit_len(self.total_len).to_be_bytes());
            self.trailer_emitted = true;
        } else {
            // Trailer does not fit, it gets a block of its own on the next call.
            block[pos..].fill(0);
        }

        true
    }

    fn blocks_left(&self) -> usize {
        if self.trailer_emitted {
            0
        } else if self.marker_emitted {
            1
        } else {
            let len = self.remaining.len();
            len / BLOCK_LEN + tail_blocks(len % BLOCK_LEN) as usize
        }
    }
}

/// Blocks needed for a tail of `rem < BLOCK_LEN` bytes plus marker and trailer.
#[inline]
fn tail_blocks(rem: usize) -> u64 {
    if rem + 1 + LENGTH_LEN <= BLOCK_LEN {
        1
    } else {
        2
    }
}

/// Message length in bits, modulo 2^64.
#[inline]
fn bit_len(byte_len: u64) -> u64 {
    ((byte_len as u128) << 3) as u64
}

impl Iterator for Chunker<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let mut block = [0u8; BLOCK_LEN];
        if self.next_block(&mut block) {
            Some(block)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.blocks_left();
        (left, Some(left))
    }
}

impl ExactSizeIterator for Chunker<'_> {}

impl FusedIterator for Chunker<'_> {}

impl fmt::Debug for Chunker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunker")
            .field("total_len", &self.total_len)
            .field("remaining", &self.remaining.len())
            .field("marker_emitted", &self.marker_emitted)
            .field("trailer_emitted", &self.trailer_emitted)
            .finish()
    }
}
