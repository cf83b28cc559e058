//! SHA-1 round functions and round schedules.
//!
//! Rounds 0..20 use `ch`, 20..40 `parity`, 40..60 `maj` and 60..80
//! `parity` again, each group with its own constant from [`K160`].

use super::K160;

#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ ((!b) & d)
}

#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ (b & d) ^ (c & d)
}

/// Expands schedule word `t` (t >= 16) in place:
/// `w[t] = rotl1(w[t-3] ^ w[t-8] ^ w[t-14] ^ w[t-16])`.
#[inline(always)]
fn schedule(w: &mut [u32; 16], t: usize) {
    w[t & 15] = (w[(t + 13) & 15] ^ w[(t + 8) & 15] ^ w[(t + 2) & 15] ^ w[t & 15]).rotate_left(1);
}

#[inline(always)]
fn round_function(t: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match t / 20 {
        0 => (ch(b, c, d), K160[0]),
        1 => (parity(b, c, d), K160[1]),
        2 => (maj(b, c, d), K160[2]),
        _ => (parity(b, c, d), K160[3]),
    }
}

/// Runs the 80 rounds in a loop and adds the result into `state`.
pub fn all_rounds(state: &mut [u32; 5], mut w: [u32; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for i in 0..80 {
        if i >= 16 {
            schedule(&mut w, i);
        }

        let (f, k) = round_function(i, b, c, d);

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w[i & 15]);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Same as [`all_rounds`], with every round expanded at compile time.
pub fn all_rounds_unrolled(state: &mut [u32; 5], w: &mut [u32; 16]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    macro_rules! R {
        ($i:expr, $f:ident, $k:expr) => {{
            if $i >= 16 {
                schedule(w, $i);
            }

            let temp = a
                .rotate_left(5)
                .wrapping_add($f(b, c, d))
                .wrapping_add(e)
                .wrapping_add($k)
                .wrapping_add(w[$i & 15]);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }};
    }

    macro_rules! rounds {
        ($f:ident, $k:expr; $($i:literal)*) => {
            $( R!($i, $f, $k); )*
        };
    }

    rounds!(ch, K160[0]; 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19);
    rounds!(parity, K160[1]; 20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39);
    rounds!(maj, K160[2]; 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59);
    rounds!(parity, K160[3]; 60 61 62 63 64 65 66 67 68 69 70 71 72 73 74 75 76 77 78 79);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
