//! The 64-bit members of the FarmHash family.
//!
//! FarmHash picks a different mixing strategy depending on the input length. [hash64] follows the
//! portable dispatch (`farmhashxo`), which borrows the short-input paths of `farmhashna` and the
//! long-input loop of `farmhashuo`. [fingerprint64] is the `farmhashna` function on its own, which
//! is the variant FarmHash promises never to change.

use crate::convert::ReadFromSlice;

const K0: u64 = 0xc3a5_c85c_97cb_3127;
const K1: u64 = 0xb492_b66f_be98_f273;
const K2: u64 = 0x9ae1_6a3b_2f90_404f;

// Multiplier of the 128 to 64 bit reduction.
const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

#[inline(always)]
fn shift_mix(val: u64) -> u64 {
    val ^ (val >> 47)
}

#[inline(always)]
fn hash_len_16_mul(u: u64, v: u64, mul: u64) -> u64 {
    let mut a = (u ^ v).wrapping_mul(mul);
    a ^= a >> 47;
    let mut b = (v ^ a).wrapping_mul(mul);
    b ^= b >> 47;
    b.wrapping_mul(mul)
}

/// Reduces the 128 bit value `(low: u, high: v)` to 64 bits.
#[inline(always)]
fn hash_len_16(u: u64, v: u64) -> u64 {
    hash_len_16_mul(u, v, K_MUL)
}

#[inline(always)]
fn weak_hash_len_32_with_seeds(w: u64, x: u64, y: u64, z: u64, mut a: u64, mut b: u64) -> (u64, u64) {
    a = a.wrapping_add(w);
    b = b.wrapping_add(a).wrapping_add(z).rotate_right(21);
    let c = a;
    a = a.wrapping_add(x).wrapping_add(y);
    b = b.wrapping_add(a.rotate_right(44));
    (a.wrapping_add(z), b.wrapping_add(c))
}

/// Mixes the first 32 bytes of `s` with the seeds `a` and `b`.
#[inline(always)]
fn weak_hash_32(s: &[u8], a: u64, b: u64) -> (u64, u64) {
    weak_hash_len_32_with_seeds(s.fetch64(0), s.fetch64(8), s.fetch64(16), s.fetch64(24), a, b)
}

mod na {
    use super::*;

    pub(super) fn hash_len_0_to_16(s: &[u8]) -> u64 {
        let len = s.len();
        if len >= 8 {
            let mul = K2.wrapping_add(len as u64 * 2);
            let a = s.fetch64(0).wrapping_add(K2);
            let b = s.read_last_u64();
            let c = b.rotate_right(37).wrapping_mul(mul).wrapping_add(a);
            let d = a.rotate_right(25).wrapping_add(b).wrapping_mul(mul);
            return hash_len_16_mul(c, d, mul);
        }
        if len >= 4 {
            let mul = K2.wrapping_add(len as u64 * 2);
            let a = s.fetch32(0) as u64;
            return hash_len_16_mul((len as u64).wrapping_add(a << 3), s.fetch32(len - 4) as u64, mul);
        }
        if len > 0 {
            let a = s[0] as u32;
            let b = s[len >> 1] as u32;
            let c = s[len - 1] as u32;
            let y = a.wrapping_add(b << 8);
            let z = (len as u32).wrapping_add(c << 2);
            return shift_mix((y as u64).wrapping_mul(K2) ^ (z as u64).wrapping_mul(K0)).wrapping_mul(K2);
        }
        K2
    }

    pub(super) fn hash_len_17_to_32(s: &[u8]) -> u64 {
        let len = s.len();
        let mul = K2.wrapping_add(len as u64 * 2);
        let a = s.fetch64(0).wrapping_mul(K1);
        let b = s.fetch64(8);
        let c = s.fetch64(len - 8).wrapping_mul(mul);
        let d = s.fetch64(len - 16).wrapping_mul(K2);
        hash_len_16_mul(
            a.wrapping_add(b).rotate_right(43).wrapping_add(c.rotate_right(30)).wrapping_add(d),
            a.wrapping_add(b.wrapping_add(K2).rotate_right(18)).wrapping_add(c),
            mul,
        )
    }

    fn hash_len_33_to_64(s: &[u8]) -> u64 {
        let len = s.len();
        let mul = K2.wrapping_add(len as u64 * 2);
        let a = s.fetch64(0).wrapping_mul(K2);
        let b = s.fetch64(8);
        let c = s.fetch64(len - 8).wrapping_mul(mul);
        let d = s.fetch64(len - 16).wrapping_mul(K2);
        let y = a.wrapping_add(b).rotate_right(43).wrapping_add(c.rotate_right(30)).wrapping_add(d);
        let z = hash_len_16_mul(y, a.wrapping_add(b.wrapping_add(K2).rotate_right(18)).wrapping_add(c), mul);
        let e = s.fetch64(16).wrapping_mul(mul);
        let f = s.fetch64(24);
        let g = y.wrapping_add(s.fetch64(len - 32)).wrapping_mul(mul);
        let h = z.wrapping_add(s.fetch64(len - 24)).wrapping_mul(mul);
        hash_len_16_mul(
            e.wrapping_add(f).rotate_right(43).wrapping_add(g.rotate_right(30)).wrapping_add(h),
            e.wrapping_add(f.wrapping_add(a).rotate_right(18)).wrapping_add(g),
            mul,
        )
    }

    pub(super) fn hash64(s: &[u8]) -> u64 {
        const SEED: u64 = 81;
        let len = s.len();
        if len <= 32 {
            return if len <= 16 { hash_len_0_to_16(s) } else { hash_len_17_to_32(s) };
        } else if len <= 64 {
            return hash_len_33_to_64(s);
        }

        let mut x = SEED;
        let mut y = SEED.wrapping_mul(K1).wrapping_add(113);
        let mut z = shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2);
        let mut v = (0u64, 0u64);
        let mut w = (0u64, 0u64);
        x = x.wrapping_mul(K2).wrapping_add(s.fetch64(0));

        // Every whole 64 byte block except the last one, which is handled after the loop.
        let end = ((len - 1) / 64) * 64;
        for block in s[..end].chunks_exact(64) {
            x = x.wrapping_add(y).wrapping_add(v.0).wrapping_add(block.fetch64(8)).rotate_right(37).wrapping_mul(K1);
            y = y.wrapping_add(v.1).wrapping_add(block.fetch64(48)).rotate_right(42).wrapping_mul(K1);
            x ^= w.1;
            y = y.wrapping_add(v.0).wrapping_add(block.fetch64(40));
            z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(K1);
            v = weak_hash_32(block, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
            w = weak_hash_32(&block[32..], z.wrapping_add(w.1), y.wrapping_add(block.fetch64(16)));
            core::mem::swap(&mut z, &mut x);
        }

        let mul = K1.wrapping_add((z & 0xff) << 1);
        let last = &s[len - 64..];
        w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
        v.0 = v.0.wrapping_add(w.0);
        w.0 = w.0.wrapping_add(v.0);
        x = x.wrapping_add(y).wrapping_add(v.0).wrapping_add(last.fetch64(8)).rotate_right(37).wrapping_mul(mul);
        y = y.wrapping_add(v.1).wrapping_add(last.fetch64(48)).rotate_right(42).wrapping_mul(mul);
        x ^= w.1.wrapping_mul(9);
        y = y.wrapping_add(v.0.wrapping_mul(9)).wrapping_add(last.fetch64(40));
        z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(mul);
        v = weak_hash_32(last, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
        w = weak_hash_32(&last[32..], z.wrapping_add(w.1), y.wrapping_add(last.fetch64(16)));
        core::mem::swap(&mut z, &mut x);
        hash_len_16_mul(
            hash_len_16_mul(v.0, w.0, mul)
                .wrapping_add(shift_mix(y).wrapping_mul(K0))
                .wrapping_add(z),
            hash_len_16_mul(v.1, w.1, mul).wrapping_add(x),
            mul,
        )
    }

    pub(super) fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
        hash_len_16(hash64(s).wrapping_sub(seed0), seed1)
    }
}

mod uo {
    use super::*;

    #[inline(always)]
    fn h(x: u64, y: u64, mul: u64, r: u32) -> u64 {
        let mut a = (x ^ y).wrapping_mul(mul);
        a ^= a >> 47;
        let b = (y ^ a).wrapping_mul(mul);
        b.rotate_right(r).wrapping_mul(mul)
    }

    pub(super) fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
        let len = s.len();
        if len <= 64 {
            return na::hash64_with_seeds(s, seed0, seed1);
        }

        let mut x = seed0;
        let mut y = seed1.wrapping_mul(K2).wrapping_add(113);
        let mut z = shift_mix(y.wrapping_mul(K2)).wrapping_mul(K2);
        let mut v = (seed0, seed1);
        let mut w = (0u64, 0u64);
        let mut u = x.wrapping_sub(z);
        x = x.wrapping_mul(K2);
        let mul = K2.wrapping_add(u & 0x82);

        let end = ((len - 1) / 64) * 64;
        for block in s[..end].chunks_exact(64) {
            let a0 = block.fetch64(0);
            let a1 = block.fetch64(8);
            let a2 = block.fetch64(16);
            let a3 = block.fetch64(24);
            let a4 = block.fetch64(32);
            let a5 = block.fetch64(40);
            let a6 = block.fetch64(48);
            let a7 = block.fetch64(56);
            x = x.wrapping_add(a0).wrapping_add(a1);
            y = y.wrapping_add(a2);
            z = z.wrapping_add(a3);
            v.0 = v.0.wrapping_add(a4);
            v.1 = v.1.wrapping_add(a5).wrapping_add(a1);
            w.0 = w.0.wrapping_add(a6);
            w.1 = w.1.wrapping_add(a7);

            x = x.rotate_right(26).wrapping_mul(9);
            y = y.rotate_right(29);
            z = z.wrapping_mul(mul);
            v.0 = v.0.rotate_right(33);
            v.1 = v.1.rotate_right(30);
            w.0 = (w.0 ^ x).wrapping_mul(9);
            z = z.rotate_right(32).wrapping_add(w.1);
            w.1 = w.1.wrapping_add(z);
            z = z.wrapping_mul(9);
            core::mem::swap(&mut u, &mut y);

            z = z.wrapping_add(a0).wrapping_add(a6);
            v.0 = v.0.wrapping_add(a2);
            v.1 = v.1.wrapping_add(a3);
            w.0 = w.0.wrapping_add(a4);
            w.1 = w.1.wrapping_add(a5).wrapping_add(a6);
            x = x.wrapping_add(a1);
            y = y.wrapping_add(a7);

            y = y.wrapping_add(v.0);
            v.0 = v.0.wrapping_add(x.wrapping_sub(y));
            v.1 = v.1.wrapping_add(w.0);
            w.0 = w.0.wrapping_add(v.1);
            w.1 = w.1.wrapping_add(x.wrapping_sub(y));
            x = x.wrapping_add(w.1);
            w.1 = w.1.rotate_right(34);
            core::mem::swap(&mut u, &mut z);
        }

        let last = &s[len - 64..];
        u = u.wrapping_mul(9);
        v.1 = v.1.rotate_right(28);
        v.0 = v.0.rotate_right(20);
        w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
        u = u.wrapping_add(y);
        y = y.wrapping_add(u);
        x = y.wrapping_sub(x).wrapping_add(v.0).wrapping_add(last.fetch64(8)).rotate_right(37).wrapping_mul(mul);
        y = (y ^ v.1 ^ last.fetch64(48)).rotate_right(42).wrapping_mul(mul);
        x ^= w.1.wrapping_mul(9);
        y = y.wrapping_add(v.0).wrapping_add(last.fetch64(40));
        z = z.wrapping_add(w.0).rotate_right(33).wrapping_mul(mul);
        v = weak_hash_32(last, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
        w = weak_hash_32(&last[32..], z.wrapping_add(w.1), y.wrapping_add(last.fetch64(16)));
        h(
            hash_len_16_mul(v.0.wrapping_add(x), w.0 ^ y, mul)
                .wrapping_add(z)
                .wrapping_sub(u),
            h(v.1.wrapping_add(y), w.1.wrapping_add(z), K2, 30) ^ x,
            K2,
            31,
        )
    }

    pub(super) fn hash64(s: &[u8]) -> u64 {
        if s.len() <= 64 {
            na::hash64(s)
        } else {
            hash64_with_seeds(s, 81, 0)
        }
    }
}

mod xo {
    use super::*;

    /// Hashes a 32 byte window.
    #[inline(always)]
    fn h32(s: &[u8], mul: u64, seed0: u64, seed1: u64) -> u64 {
        let a = s.fetch64(0).wrapping_mul(K1);
        let b = s.fetch64(8);
        let c = s.fetch64(24).wrapping_mul(mul);
        let d = s.fetch64(16).wrapping_mul(K2);
        let u = a
            .wrapping_add(b)
            .rotate_right(43)
            .wrapping_add(c.rotate_right(30))
            .wrapping_add(d)
            .wrapping_add(seed0);
        let v = a
            .wrapping_add(b.wrapping_add(K2).rotate_right(18))
            .wrapping_add(c)
            .wrapping_add(seed1);
        let a = shift_mix((u ^ v).wrapping_mul(mul));
        shift_mix((v ^ a).wrapping_mul(mul))
    }

    fn hash_len_33_to_64(s: &[u8]) -> u64 {
        let len = s.len();
        let mul0 = K2.wrapping_sub(30);
        let mul1 = K2.wrapping_sub(30).wrapping_add(2 * len as u64);
        let h0 = h32(s, mul0, 0, 0);
        let h1 = h32(&s[len - 32..], mul1, 0, 0);
        h1.wrapping_mul(mul1).wrapping_add(h0).wrapping_mul(mul1)
    }

    fn hash_len_65_to_96(s: &[u8]) -> u64 {
        let len = s.len();
        let mul0 = K2.wrapping_sub(114);
        let mul1 = K2.wrapping_sub(114).wrapping_add(2 * len as u64);
        let h0 = h32(s, mul0, 0, 0);
        let h1 = h32(&s[32..], mul1, 0, 0);
        let h2 = h32(&s[len - 32..], mul1, h0, h1);
        h2.wrapping_mul(9)
            .wrapping_add(h0 >> 17)
            .wrapping_add(h1 >> 21)
            .wrapping_mul(mul1)
    }

    pub(super) fn hash64(s: &[u8]) -> u64 {
        match s.len() {
            0..=16 => na::hash_len_0_to_16(s),
            17..=32 => na::hash_len_17_to_32(s),
            33..=64 => hash_len_33_to_64(s),
            65..=96 => hash_len_65_to_96(s),
            97..=256 => na::hash64(s),
            _ => uo::hash64(s),
        }
    }
}

/// Hashes `data` to 64 bits.
///
/// This is FarmHash's `Hash64`. The value is stable for a given release of this crate but, as with
/// upstream FarmHash, is not promised to stay the same forever. Use [fingerprint64] where the
/// hash is persisted.
///
/// # Example
///
/// ```
/// assert_eq!(hash64::hash64(b"Retezeckzahashovani"), 17735793547992799661);
/// ```
#[inline]
pub fn hash64(data: &[u8]) -> u64 {
    xo::hash64(data)
}

/// Hashes `data` to 64 bits, folding in a single seed.
///
/// This is `farmhashxo::Hash64WithSeed`, the seeded companion of [hash64]. Upstream's
/// `util::Hash64WithSeed` is built on `farmhashna` instead; the two agree up to 64 bytes and
/// differ on longer inputs.
#[inline]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
    if data.len() <= 64 {
        na::hash64_with_seeds(data, K2, seed)
    } else {
        uo::hash64_with_seeds(data, 0, seed)
    }
}

/// Hashes `data` to 64 bits, folding in two seeds.
///
/// This is `farmhashxo::Hash64WithSeeds`. Like [hash64_with_seed] it matches upstream's
/// `util::Hash64WithSeeds` only for inputs of at most 64 bytes.
#[inline]
pub fn hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
    uo::hash64_with_seeds(data, seed0, seed1)
}

/// FarmHash's `Fingerprint64`: a 64-bit hash whose output for a given input never changes.
#[inline]
pub fn fingerprint64(data: &[u8]) -> u64 {
    na::hash64(data)
}
