/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::capacity::{BITS_PER_CHAR, HEADER_BITS};
use crate::errors::StegoErrors;

const FIELD_BITS: usize = HEADER_BITS / 2;

/// The 32 bit header stored in the first pixels of an image
///
/// Two 16 bit big endian fields, the length of the message
/// in bits followed by the pixel index where the message starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StegoHeader
{
    message_bits: u16,
    depth:        u16
}

impl StegoHeader
{
    /// Create a header for a message of `message_bits` bits stored at `depth`
    ///
    /// # Errors
    /// [`StegoErrors::FieldOverflow`] if either value needs more than 16 bits
    pub fn new(message_bits: usize, depth: usize) -> Result<StegoHeader, StegoErrors>
    {
        let message_bits = u16::try_from(message_bits)
            .map_err(|_| StegoErrors::FieldOverflow("message length", message_bits))?;
        let depth = u16::try_from(depth).map_err(|_| StegoErrors::FieldOverflow("depth", depth))?;

        Ok(StegoHeader { message_bits, depth })
    }
    /// Length of the message in bits
    pub const fn message_bits(&self) -> usize
    {
        self.message_bits as usize
    }
    /// Length of the message in characters, rounded down
    pub const fn message_len(&self) -> usize
    {
        self.message_bits() / BITS_PER_CHAR
    }
    /// Pixel index of the first message bit
    pub const fn depth(&self) -> usize
    {
        self.depth as usize
    }
    /// Serialize to 32 bits, most significant bit first
    ///
    /// ```
    /// use steg_codec::StegoHeader;
    /// let bits = StegoHeader::new(8, 11).unwrap().to_bits();
    /// let length: String = bits[..16].iter().map(|b| if *b { '1' } else { '0' }).collect();
    /// assert_eq!(length, "0000000000001000");
    /// ```
    pub fn to_bits(&self) -> [bool; HEADER_BITS]
    {
        let mut bits = [false; HEADER_BITS];
        let (length, depth) = bits.split_at_mut(FIELD_BITS);

        write_field(length, self.message_bits);
        write_field(depth, self.depth);

        bits
    }
    /// Parse the 32 header bits
    pub fn from_bits(bits: &[bool; HEADER_BITS]) -> StegoHeader
    {
        let (length, depth) = bits.split_at(FIELD_BITS);

        StegoHeader {
            message_bits: read_field(length),
            depth:        read_field(depth)
        }
    }
}

fn write_field(out: &mut [bool], value: u16)
{
    for (position, bit) in out.iter_mut().enumerate()
    {
        *bit = (value >> (FIELD_BITS - 1 - position)) & 1 == 1;
    }
}

fn read_field(bits: &[bool]) -> u16
{
    bits.iter().fold(0, |acc, bit| (acc << 1) | u16::from(*bit))
}
