/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Capacity arithmetic
//!
//! Every pixel carries three bits, one per channel. The header
//! always occupies the first [`HEADER_PIXELS`] pixels and the
//! message starts at pixel `depth`.
use steg_core::pixels::CHANNELS;

/// Number of bits in the embedded header
pub const HEADER_BITS: usize = 32;
/// Number of pixels the header occupies
pub const HEADER_PIXELS: usize = pixels_for_bits(HEADER_BITS);
/// Smallest depth that does not overlap the header
pub const MIN_DEPTH: usize = HEADER_PIXELS;
/// Bits used to store a single character
pub const BITS_PER_CHAR: usize = 8;
/// Largest value a header field can hold
pub const MAX_FIELD_VALUE: usize = u16::MAX as usize;
/// Longest message, in characters, whose bit length fits in the header
pub const MAX_MESSAGE_LEN: usize = MAX_FIELD_VALUE / BITS_PER_CHAR;

/// Pixels needed to carry `bits` bits
///
/// ```
/// use steg_codec::capacity::pixels_for_bits;
/// assert_eq!(pixels_for_bits(32), 11);
/// assert_eq!(pixels_for_bits(16), 6);
/// assert_eq!(pixels_for_bits(0), 0);
/// ```
pub const fn pixels_for_bits(bits: usize) -> usize
{
    bits.div_ceil(CHANNELS)
}

/// Total pixels needed for a message of `chars` characters at `depth`
///
/// Saturates instead of overflowing.
pub const fn required_pixels(depth: usize, chars: usize) -> usize
{
    let payload = pixels_for_bits(chars.saturating_mul(BITS_PER_CHAR));
    let end = depth.saturating_add(payload);

    if end < HEADER_PIXELS
    {
        HEADER_PIXELS
    }
    else
    {
        end
    }
}

/// Longest message in characters that fits in `pixel_count` pixels
/// when written at `depth`
///
/// Depths inside the header have no capacity.
pub fn max_message_len(pixel_count: usize, depth: usize) -> usize
{
    if depth < MIN_DEPTH
    {
        return 0;
    }
    let bits = pixel_count.saturating_sub(depth).saturating_mul(CHANNELS);

    (bits / BITS_PER_CHAR).min(MAX_MESSAGE_LEN)
}

/// Largest depth at which `chars` characters still fit
///
/// Returns `None` if the message does not fit at any depth
///
/// ```
/// use steg_codec::capacity::max_depth;
/// // 16 pixels, "Hi" needs 6 of them
/// assert_eq!(max_depth(16, 2), None);
/// assert_eq!(max_depth(17, 2), Some(11));
/// ```
pub fn max_depth(pixel_count: usize, chars: usize) -> Option<usize>
{
    if chars > MAX_MESSAGE_LEN
    {
        return None;
    }
    let payload = pixels_for_bits(chars * BITS_PER_CHAR);

    pixel_count
        .checked_sub(payload)
        .filter(|depth| *depth >= MIN_DEPTH)
        .map(|depth| depth.min(MAX_FIELD_VALUE))
}

#[cfg(test)]
mod tests
{
    use crate::capacity::*;

    #[test]
    fn header_takes_eleven_pixels()
    {
        assert_eq!(HEADER_PIXELS, 11);
        assert_eq!(MIN_DEPTH, 11);
    }

    #[test]
    fn required_pixels_counts_partial_pixels()
    {
        // "Hi" is 16 bits, 6 pixels
        assert_eq!(required_pixels(11, 2), 17);
        // "A" is 8 bits, 3 pixels
        assert_eq!(required_pixels(20, 1), 23);
        assert_eq!(required_pixels(0, 0), HEADER_PIXELS);
        assert_eq!(required_pixels(usize::MAX, 1), usize::MAX);
    }

    #[test]
    fn max_message_len_and_max_depth_agree()
    {
        for pixel_count in [11, 16, 17, 40, 1000]
        {
            for depth in MIN_DEPTH..pixel_count
            {
                let chars = max_message_len(pixel_count, depth);

                assert!(required_pixels(depth, chars) <= pixel_count);
                assert!(required_pixels(depth, chars + 1) > pixel_count);
                assert!(max_depth(pixel_count, chars).unwrap() >= depth);
            }
        }
    }

    #[test]
    fn depth_inside_header_has_no_room()
    {
        assert_eq!(max_message_len(1000, 10), 0);
        assert_eq!(max_message_len(5, 11), 0);
    }

    #[test]
    fn message_length_is_capped_by_the_header_field()
    {
        assert_eq!(max_message_len(usize::MAX / 4, MIN_DEPTH), MAX_MESSAGE_LEN);
        assert_eq!(max_depth(1 << 20, MAX_MESSAGE_LEN + 1), None);
        assert_eq!(max_depth(1 << 20, 1), Some(MAX_FIELD_VALUE));
    }
}
