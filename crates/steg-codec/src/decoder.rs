/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use steg_core::log::{debug, trace};
use steg_core::pixels::{PixelBuffer, CHANNELS};

use crate::bits::bits_to_message;
use crate::capacity::{pixels_for_bits, BITS_PER_CHAR, HEADER_BITS, HEADER_PIXELS, MIN_DEPTH};
use crate::errors::StegoErrors;
use crate::header::StegoHeader;
use crate::parity::extract_bit;

/// Recovers a message hidden by [`ParityEncoder`](crate::ParityEncoder)
///
/// Any buffer can be handed to the decoder, buffers that were
/// never encoded produce [`StegoErrors::MalformedBitstream`]
/// instead of text.
pub struct ParityDecoder<'a>
{
    pixels: &'a PixelBuffer
}

impl<'a> ParityDecoder<'a>
{
    pub const fn new(pixels: &'a PixelBuffer) -> ParityDecoder<'a>
    {
        ParityDecoder { pixels }
    }
    /// Read the header from the first eleven pixels
    ///
    /// The header is returned as found, no consistency
    /// checks are made against the buffer.
    pub fn read_header(&self) -> Result<StegoHeader, StegoErrors>
    {
        if self.pixels.len() < HEADER_PIXELS
        {
            return Err(StegoErrors::MalformedBitstream(format!(
                "{} pixels cannot hold a header",
                self.pixels.len()
            )));
        }
        let mut bits = [false; HEADER_BITS];

        for (bit, channel) in bits.iter_mut().zip(self.pixels.channels())
        {
            *bit = extract_bit(*channel);
        }
        let header = StegoHeader::from_bits(&bits);

        trace!("Header bits read: {:?}", header);

        Ok(header)
    }
    /// Read the header and reject ones that cannot describe
    /// a message stored in this buffer
    pub fn read_valid_header(&self) -> Result<StegoHeader, StegoErrors>
    {
        let header = self.read_header()?;

        if header.message_bits() % BITS_PER_CHAR != 0
        {
            return Err(StegoErrors::MalformedBitstream(format!(
                "message length of {} bits is not a multiple of {BITS_PER_CHAR}",
                header.message_bits()
            )));
        }
        if header.depth() < MIN_DEPTH
        {
            return Err(StegoErrors::MalformedBitstream(format!(
                "depth {} overlaps the header",
                header.depth()
            )));
        }
        let end = header.depth() + pixels_for_bits(header.message_bits());

        if end > self.pixels.len()
        {
            return Err(StegoErrors::MalformedBitstream(format!(
                "message ends at pixel {end} but the image has {} pixels",
                self.pixels.len()
            )));
        }
        Ok(header)
    }
    /// Recover the hidden message
    ///
    /// # Errors
    /// [`StegoErrors::MalformedBitstream`] if the header is inconsistent
    /// or the message bits do not decode to ASCII
    pub fn decode(&self) -> Result<String, StegoErrors>
    {
        let header = self.read_valid_header()?;

        debug!(
            "Reading {} bits at depth {}",
            header.message_bits(),
            header.depth()
        );
        let start = header.depth() * CHANNELS;
        let bits: Vec<bool> = self.pixels.channels()[start..start + header.message_bits()]
            .iter()
            .map(|channel| extract_bit(*channel))
            .collect();

        bits_to_message(&bits)
    }
}
