//! IEEE754 half-precision bit conversion.
//!
//! Half values travel on the wire as 16-bit patterns and are surfaced to
//! callers as `f32`. Widening is exact; narrowing rounds to nearest, ties
//! to even, and overflows to infinity.

/// Widens a half-precision bit pattern to `f32`.
pub(crate) fn f16_to_f32(h: u16) -> f32 {
    let sign = ((h as u32) & 0x8000) << 16;
    let exp = ((h as u32) >> 10) & 0x1f;
    let mant = (h as u32) & 0x3ff;

    let bits = match exp {
        0 => {
            if mant == 0 {
                // signed zero
                sign
            } else {
                // Subnormal half: normalize into an f32 exponent.
                let shift = mant.leading_zeros() - 21;
                let mant = (mant << shift) & 0x3ff;
                let exp = 113 - shift;
                sign | (exp << 23) | (mant << 13)
            }
        }
        // infinity and NaN; payload bits carry over
        31 => sign | 0x7f80_0000 | (mant << 13),
        _ => sign | ((exp + 112) << 23) | (mant << 13),
    };
    f32::from_bits(bits)
}

/// Narrows an `f32` to a half-precision bit pattern, rounding to nearest
/// with ties to even.
pub(crate) fn f32_to_f16(f: f32) -> u16 {
    let bits = f.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xff) as i32;
    let mant = bits & 0x7f_ffff;

    if exp == 255 {
        // infinity and NaN; keep NaN quiet by forcing a payload bit
        return if mant == 0 {
            sign | 0x7c00
        } else {
            sign | 0x7e00 | ((mant >> 13) as u16 & 0x1ff)
        };
    }

    let unbiased = exp - 127;
    if unbiased >= 16 {
        // overflow to infinity
        return sign | 0x7c00;
    }
    if unbiased >= -14 {
        // Normal half. Rounding may carry into the exponent, which is
        // exactly the desired promotion (including to infinity).
        let half_exp = (unbiased + 15) as u32;
        let keep = mant >> 13;
        let mut h = (sign as u32) | (half_exp << 10) | keep;
        let round = 1u32 << 12;
        if (mant & round) != 0 && ((mant & (round - 1)) != 0 || (keep & 1) != 0) {
            h += 1;
        }
        return h as u16;
    }
    if unbiased >= -25 {
        // Subnormal half: shift the full 24-bit significand down. A round
        // up from the largest subnormal lands on the smallest normal.
        let m = mant | 0x80_0000;
        let shift = (-1 - unbiased) as u32;
        let keep = m >> shift;
        let mut h = (sign as u32) | keep;
        let round = 1u32 << (shift - 1);
        if (m & round) != 0 && ((m & (round - 1)) != 0 || (keep & 1) != 0) {
            h += 1;
        }
        return h as u16;
    }
    // underflow to signed zero
    sign
}
