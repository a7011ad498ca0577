use byteorder::{BigEndian, ByteOrder};

use crate::consts::{SCHEDULE_LEN, WORDS_PER_BLOCK};
use crate::padding::Block;
use crate::sha256_utils::{small_sigma0, small_sigma1};

/// Message schedule: one word per compression round.
pub type Schedule = [u32; SCHEDULE_LEN];

/// Expands a block into its 64-word message schedule.
///
/// The first 16 words are the block read as big-endian words, each following word mixes four
/// earlier ones: `w[i] = w[i - 16] + s0(w[i - 15]) + w[i - 7] + s1(w[i - 2])` modulo 2^32.
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; SCHEDULE_LEN];
    BigEndian::read_u32_into(block, &mut w[..WORDS_PER_BLOCK]);

    for i in WORDS_PER_BLOCK..SCHEDULE_LEN {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::consts::BLOCK_LEN;
    use crate::padding::Chunker;

    #[test]
    fn test_leading_words_big_endian() {
        let mut block = [0u8; BLOCK_LEN];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = i as u8;
        }

        let w = expand(&block);
        assert_eq!(w[0], 0x0001_0203);
        assert_eq!(w[1], 0x0405_0607);
        assert_eq!(w[15], 0x3c3d_3e3f);
    }

    #[test]
    fn test_zero_block_expands_to_zero() {
        let w = expand(&[0u8; BLOCK_LEN]);
        assert!(w.iter().all(|word| *word == 0));
    }

    #[test]
    fn test_abc_schedule() {
        let block = Chunker::new(b"abc").next().unwrap();
        let w = expand(&block);

        assert_eq!(w[0], 0x6162_6380);
        assert!(w[1..15].iter().all(|word| *word == 0));
        assert_eq!(w[15], 0x0000_0018);
        // Values from the FIPS 180-2 worked example for "abc".
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000f_0000);
        assert_eq!(w[63], 0x12b1_edeb);
    }

    #[test]
    fn test_recurrence_wraps() {
        let block = [0xffu8; BLOCK_LEN];
        let w = expand(&block);

        for i in 16..SCHEDULE_LEN {
            let expected = (w[i - 16] as u64
                + small_sigma0(w[i - 15]) as u64
                + w[i - 7] as u64
                + small_sigma1(w[i - 2]) as u64)
                % (1u64 << 32);
            assert_eq!(w[i] as u64, expected, "word {}", i);
        }
    }
}
