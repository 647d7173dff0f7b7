/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Storing one bit in the parity of a channel
//!
//! An even channel carries a `0`, an odd channel a `1`.
//! Writing a bit moves the channel by at most one step and
//! never leaves the `0..=255` range.

/// Return `channel` adjusted so its parity carries `bit`
///
/// ```
/// use steg_codec::parity::embed_bit;
/// assert_eq!(embed_bit(3, false), 4);
/// assert_eq!(embed_bit(255, false), 254);
/// assert_eq!(embed_bit(254, true), 255);
/// assert_eq!(embed_bit(8, false), 8);
/// ```
#[inline(always)]
pub const fn embed_bit(channel: u8, bit: bool) -> u8
{
    match (bit, channel & 1)
    {
        (false, 1) if channel == u8::MAX => channel - 1,
        (false, 1) | (true, 0) => channel + 1,
        _ => channel
    }
}

/// Read the bit carried by `channel`
#[inline(always)]
pub const fn extract_bit(channel: u8) -> bool
{
    channel & 1 == 1
}
