/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use steg_core::log::debug;
use steg_core::pixels::PixelBuffer;

use crate::errors::PpmEncodeErrors;
use crate::kind::PpmKind;

/// Create a minimal three line header for an image
///
/// ```
/// use steg_ppm::{fresh_header, PpmKind};
/// assert_eq!(fresh_header(PpmKind::Ascii, 2, 1), b"P3\n2 1\n255\n");
/// ```
pub fn fresh_header(kind: PpmKind, width: usize, height: usize) -> Vec<u8>
{
    let mut header = kind.magic().to_vec();
    header.extend_from_slice(format!("\n{width} {height}\n255\n").as_bytes());
    header
}

/// A PPM encoder
///
/// The encoder writes a header it was given verbatim followed by
/// pixels in the layout that header's magic bytes call for.
///
/// # Example
/// ```
/// use steg_core::pixels::{PixelBuffer, Rgb};
/// use steg_ppm::PpmEncoder;
///
/// let pixels = PixelBuffer::filled(Rgb::new(1, 2, 3), 1);
/// let bytes = PpmEncoder::new(b"P3\n1 1\n255\n").unwrap().encode_to_vec(&pixels).unwrap();
///
/// assert_eq!(bytes, b"P3\n1 1\n255\n1\n2\n3\n");
/// ```
pub struct PpmEncoder<'a>
{
    header: &'a [u8],
    kind:   PpmKind
}

impl<'a> PpmEncoder<'a>
{
    /// Create a new encoder which will write `header` before the pixels
    ///
    /// # Errors
    /// If the header does not begin with `P3` or `P6`
    pub fn new(header: &'a [u8]) -> Result<PpmEncoder<'a>, PpmEncodeErrors>
    {
        let mut magic = [0; 2];

        for (dst, src) in magic.iter_mut().zip(header)
        {
            *dst = *src;
        }
        let kind = PpmKind::from_magic(header.get(..2).unwrap_or(&[]))
            .ok_or(PpmEncodeErrors::UnsupportedType(magic))?;

        Ok(PpmEncoder { header, kind })
    }
    /// The layout pixels will be written in
    pub const fn kind(&self) -> PpmKind
    {
        self.kind
    }
    /// Write the header and pixels to `sink`
    ///
    /// Returns the number of bytes written
    pub fn encode<W: Write>(&self, pixels: &PixelBuffer, sink: &mut W) -> Result<usize, PpmEncodeErrors>
    {
        sink.write_all(self.header)?;

        let mut written = self.header.len();

        match self.kind
        {
            PpmKind::Binary =>
            {
                sink.write_all(pixels.channels())?;
                written += pixels.channels().len();
            }
            PpmKind::Ascii =>
            {
                // one channel per line, at most four bytes each
                let mut text: Vec<u8> = Vec::with_capacity(pixels.channels().len() * 4);

                for channel in pixels.channels()
                {
                    writeln!(text, "{channel}")?;
                }
                sink.write_all(&text)?;
                written += text.len();
            }
        }
        debug!("Wrote {} bytes as {}", written, self.kind);

        Ok(written)
    }
    /// Encode into a newly allocated buffer
    pub fn encode_to_vec(&self, pixels: &PixelBuffer) -> Result<Vec<u8>, PpmEncodeErrors>
    {
        let mut sink = Vec::with_capacity(self.header.len() + pixels.channels().len());
        self.encode(pixels, &mut sink)?;
        Ok(sink)
    }
}
