pub use super::K256;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands the message schedule in place: `w` is a 16-word ring buffer,
/// and word `i` (for `i >= 16`) overwrites word `i - 16`.
#[inline(always)]
fn schedule(w: &mut [u32; 16], i: usize) -> u32 {
    if i >= 16 {
        let w16 = w[(i - 16) & 15];
        let w15 = w[(i - 15) & 15];
        let w7 = w[(i - 7) & 15];
        let w2 = w[(i - 2) & 15];

        w[i & 15] = w16
            .wrapping_add(small_sigma0(w15))
            .wrapping_add(w7)
            .wrapping_add(small_sigma1(w2));
    }

    w[i & 15]
}

/// One compression round over the working variables `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
fn round(v: &mut [u32; 8], wi: u32, ki: u32) {
    let [a, b, c, d, e, f, g, h] = *v;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(wi)
        .wrapping_add(ki);

    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    *v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}

#[inline(always)]
fn feed_forward(state: &mut [u32; 8], v: &[u32; 8]) {
    for (s, x) in state.iter_mut().zip(v.iter()) {
        *s = s.wrapping_add(*x);
    }
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let mut v = *state;

    for (i, &ki) in K256.iter().enumerate() {
        let wi = schedule(&mut w, i);
        round(&mut v, wi, ki);
    }

    feed_forward(state, &v);
}

#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let mut v = *state;

    macro_rules! rounds {
        ($($i:literal)*) => {
            $(
                let wi = schedule(&mut w, $i);
                round(&mut v, wi, K256[$i]);
            )*
        };
    }

    rounds!(
         0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
        16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
        32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
        48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
    );

    feed_forward(state, &v);
}
