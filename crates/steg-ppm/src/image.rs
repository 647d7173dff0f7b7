/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use steg_core::pixels::PixelBuffer;

use crate::encoder::fresh_header;
use crate::errors::PpmDecodeErrors;
use crate::kind::PpmKind;

/// A decoded PPM image
///
/// Holds the header exactly as it appeared in the file alongside
/// the parsed pixels, `width * height` always equals the pixel count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PpmImage
{
    kind:       PpmKind,
    raw_header: Vec<u8>,
    width:      usize,
    height:     usize,
    max_value:  usize,
    pixels:     PixelBuffer
}

impl PpmImage
{
    /// Create an image from pixels in memory
    ///
    /// A standard three line header is generated for it.
    ///
    /// # Errors
    /// If `width * height` does not match the number of pixels
    pub fn new(
        kind: PpmKind, width: usize, height: usize, pixels: PixelBuffer
    ) -> Result<PpmImage, PpmDecodeErrors>
    {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| PpmDecodeErrors::MalformedDimensions(format!("{width}x{height} overflows")))?;

        if expected != pixels.len()
        {
            return Err(PpmDecodeErrors::DimensionMismatch(expected, pixels.len()));
        }
        Ok(PpmImage {
            kind,
            raw_header: fresh_header(kind, width, height),
            width,
            height,
            max_value: usize::from(u8::MAX),
            pixels
        })
    }

    pub(crate) fn from_parts(
        kind: PpmKind, raw_header: Vec<u8>, (width, height): (usize, usize), max_value: usize,
        pixels: PixelBuffer
    ) -> PpmImage
    {
        PpmImage {
            kind,
            raw_header,
            width,
            height,
            max_value,
            pixels
        }
    }
    pub const fn kind(&self) -> PpmKind
    {
        self.kind
    }
    /// The header bytes, including the final whitespace before pixel data
    pub fn raw_header(&self) -> &[u8]
    {
        &self.raw_header
    }
    pub const fn width(&self) -> usize
    {
        self.width
    }
    pub const fn height(&self) -> usize
    {
        self.height
    }
    /// Largest sample value allowed by the header
    ///
    /// Headers read in legacy mode report 255.
    pub const fn max_value(&self) -> usize
    {
        self.max_value
    }
    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize)
    {
        (self.width, self.height)
    }
    pub const fn pixels(&self) -> &PixelBuffer
    {
        &self.pixels
    }
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer
    {
        &mut self.pixels
    }
}
