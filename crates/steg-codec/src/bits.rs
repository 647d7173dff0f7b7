/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion between ASCII text and bit sequences
//!
//! Each character becomes eight bits, most significant first.
use crate::capacity::BITS_PER_CHAR;
use crate::errors::StegoErrors;

/// Expand `message` into its bits
///
/// # Errors
/// [`StegoErrors::UnsupportedCharacter`] for the first character that is not ASCII
///
/// ```
/// use steg_codec::bits::message_to_bits;
/// let bits = message_to_bits("A").unwrap();
/// assert_eq!(bits, [false, true, false, false, false, false, false, true]);
/// ```
pub fn message_to_bits(message: &str) -> Result<Vec<bool>, StegoErrors>
{
    let mut bits = Vec::with_capacity(message.len() * BITS_PER_CHAR);

    for (position, character) in message.chars().enumerate()
    {
        if !character.is_ascii()
        {
            return Err(StegoErrors::UnsupportedCharacter(character, position));
        }
        let byte = character as u8;

        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1 == 1));
    }
    Ok(bits)
}

/// Collapse bits back into text
///
/// # Errors
/// [`StegoErrors::MalformedBitstream`] if the bit count is not a multiple of
/// eight or a byte falls outside ASCII
pub fn bits_to_message(bits: &[bool]) -> Result<String, StegoErrors>
{
    if bits.len() % BITS_PER_CHAR != 0
    {
        return Err(StegoErrors::MalformedBitstream(format!(
            "{} bits do not form whole characters",
            bits.len()
        )));
    }
    let mut message = String::with_capacity(bits.len() / BITS_PER_CHAR);

    for (position, chunk) in bits.chunks_exact(BITS_PER_CHAR).enumerate()
    {
        let byte = chunk
            .iter()
            .fold(0_u8, |acc, bit| (acc << 1) | u8::from(*bit));

        if !byte.is_ascii()
        {
            return Err(StegoErrors::MalformedBitstream(format!(
                "byte {byte:#04x} at position {position} is not ASCII"
            )));
        }
        message.push(char::from(byte));
    }
    Ok(message)
}
