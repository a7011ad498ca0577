use byteorder::{BigEndian, ByteOrder};
use log::trace;

use crate::compress::compress_block;
use crate::consts::{BLOCK_LEN, DIGEST_LEN, H256, STATE_LEN};
use crate::padding::Chunker;

/// Running SHA-256 state for a single, in-memory message.
#[derive(Clone)]
pub struct Sha256 {
    blocks: u64,
    state: [u32; STATE_LEN],
}

impl Sha256 {
    fn new() -> Self {
        Sha256 {
            blocks: 0,
            state: H256,
        }
    }

    /// Hashes `data` in one call. Every input, including the empty one, has a digest.
    pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
        let mut sha = Sha256::new();
        let mut block = [0u8; BLOCK_LEN];
        let mut chunker = Chunker::new(data);

        while chunker.next_block(&mut block) {
            compress_block(&mut sha.state, &block);
            sha.blocks += 1;
        }

        trace!("sha256: {} bytes in {} blocks", data.len(), sha.blocks);
        sha.finish()
    }

    fn finish(self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        BigEndian::write_u32_into(&self.state, &mut out);
        out
    }
}

opaque_debug::implement!(Sha256);
