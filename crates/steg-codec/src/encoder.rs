/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use steg_core::log::{debug, trace};
use steg_core::pixels::{PixelBuffer, CHANNELS};

use crate::bits::message_to_bits;
use crate::capacity::{pixels_for_bits, HEADER_PIXELS, MIN_DEPTH};
use crate::errors::StegoErrors;
use crate::header::StegoHeader;
use crate::parity::embed_bit;

/// Hides a message in the parity of pixel channels
///
/// The header goes into the first eleven pixels and the
/// message bits start at pixel `depth`. All checks happen
/// before the first channel is touched, so a failed encode
/// leaves the pixels as they were.
///
/// # Example
/// ```
/// use steg_codec::{ParityDecoder, ParityEncoder};
/// use steg_core::pixels::{PixelBuffer, Rgb};
///
/// let mut pixels = PixelBuffer::filled(Rgb::default(), 20);
/// ParityEncoder::new("Hi", 11).encode(&mut pixels).unwrap();
///
/// assert_eq!(ParityDecoder::new(&pixels).decode().unwrap(), "Hi");
/// ```
pub struct ParityEncoder<'a>
{
    message: &'a str,
    depth:   usize
}

impl<'a> ParityEncoder<'a>
{
    /// Create an encoder that will place `message` at pixel `depth`
    pub const fn new(message: &'a str, depth: usize) -> ParityEncoder<'a>
    {
        ParityEncoder { message, depth }
    }
    /// Embed the header and message into `pixels`
    ///
    /// Returns the header that was written
    ///
    /// # Errors
    /// - [`StegoErrors::DepthTooSmall`] if depth overlaps the header
    /// - [`StegoErrors::UnsupportedCharacter`] for non ASCII messages
    /// - [`StegoErrors::FieldOverflow`] if length or depth need more than 16 bits
    /// - [`StegoErrors::CapacityExceeded`] if the message runs past the last pixel
    pub fn encode(&self, pixels: &mut PixelBuffer) -> Result<StegoHeader, StegoErrors>
    {
        if self.depth < MIN_DEPTH
        {
            return Err(StegoErrors::DepthTooSmall(self.depth));
        }
        let message_bits = message_to_bits(self.message)?;
        let header = StegoHeader::new(message_bits.len(), self.depth)?;

        let needed = self
            .depth
            .saturating_add(pixels_for_bits(message_bits.len()))
            .max(HEADER_PIXELS);

        if needed > pixels.len()
        {
            return Err(StegoErrors::CapacityExceeded {
                needed,
                available: pixels.len()
            });
        }
        debug!(
            "Embedding {} bits at depth {}, {} of {} pixels used",
            message_bits.len(),
            self.depth,
            needed,
            pixels.len()
        );
        let channels = pixels.channels_mut();

        write_bits(channels, &header.to_bits());
        write_bits(&mut channels[self.depth * CHANNELS..], &message_bits);

        trace!("Header bits written: {:?}", header);

        Ok(header)
    }
}

fn write_bits(channels: &mut [u8], bits: &[bool])
{
    for (channel, bit) in channels.iter_mut().zip(bits)
    {
        *channel = embed_bit(*channel, *bit);
    }
}
