use crate::consts::{K32, STATE_LEN};
use crate::padding::Block;
use crate::schedule::{expand, Schedule};
use crate::sha256_utils::{big_sigma0, big_sigma1, ch, maj};

/// Runs the 64 rounds over `schedule` starting from `state` and returns the updated state.
pub fn compress(state: [u32; STATE_LEN], schedule: &Schedule) -> [u32; STATE_LEN] {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

    for (k, w) in K32.iter().zip(schedule.iter()) {
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*w);
        let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    let mut out = state;
    for (word, reg) in out.iter_mut().zip(&[a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(*reg);
    }
    out
}

/// Expands `block` and folds it into `state`.
#[inline]
pub fn compress_block(state: &mut [u32; STATE_LEN], block: &Block) {
    *state = compress(*state, &expand(block));
}
