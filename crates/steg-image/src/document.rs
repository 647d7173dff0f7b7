/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use steg_codec::capacity::{max_depth, max_message_len};
use steg_codec::{ParityDecoder, ParityEncoder, StegoHeader};
use steg_core::log::{debug, info};
use steg_core::options::DecoderOptions;
use steg_core::pixels::PixelBuffer;
use steg_ppm::{PpmDecoder, PpmEncoder, PpmImage, PpmKind};

use crate::errors::StegErrors;

/// A loaded PPM image that can carry a hidden message
///
/// The document owns its pixels exclusively, embedding
/// borrows them mutably and everything else reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PpmDocument
{
    image:    PpmImage,
    modified: bool
}

impl PpmDocument
{
    /// Create a document for pixels already in memory
    ///
    /// A fresh `P3`/`P6` header with a max value of 255 is generated.
    pub fn new(
        kind: PpmKind, width: usize, height: usize, pixels: PixelBuffer
    ) -> Result<PpmDocument, StegErrors>
    {
        let image = PpmImage::new(kind, width, height, pixels)?;

        Ok(PpmDocument::from(image))
    }
    /// Parse a document from the bytes of a PPM file
    pub fn from_bytes(bytes: &[u8]) -> Result<PpmDocument, StegErrors>
    {
        PpmDocument::from_bytes_with_options(bytes, DecoderOptions::default())
    }
    /// Parse a document with custom decoder options
    pub fn from_bytes_with_options(
        bytes: &[u8], options: DecoderOptions
    ) -> Result<PpmDocument, StegErrors>
    {
        let image = PpmDecoder::new_with_options(options, bytes).decode()?;

        Ok(PpmDocument::from(image))
    }
    /// Read and parse the file at `path`
    ///
    /// The extension is checked before the file is opened.
    pub fn open<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<PpmDocument, StegErrors>
    {
        let path = path.as_ref();

        check_extension(path)?;

        let bytes = std::fs::read(path)?;

        info!("Read {} bytes from {}", bytes.len(), path.display());

        PpmDocument::from_bytes_with_options(&bytes, options)
    }
    /// Hide `message` in the pixels, starting at pixel `depth`
    ///
    /// The document is marked as modified only if embedding succeeds.
    /// Images whose max value is not 255 are refused, parity
    /// coding may push a sample one above the max value.
    pub fn encode_message(&mut self, message: &str, depth: usize) -> Result<(), StegErrors>
    {
        if self.image.pixels().is_empty()
        {
            return Err(StegErrors::NoPixelData);
        }
        if self.image.max_value() != usize::from(u8::MAX)
        {
            return Err(StegErrors::UnsupportedMaxValue(self.image.max_value()));
        }
        ParityEncoder::new(message, depth).encode(self.image.pixels_mut())?;

        self.modified = true;

        info!("Encoded {} characters at depth {}", message.len(), depth);

        Ok(())
    }
    /// Recover the message hidden in the pixels
    pub fn decode_message(&self) -> Result<String, StegErrors>
    {
        if self.image.pixels().is_empty()
        {
            return Err(StegErrors::NoPixelData);
        }
        Ok(ParityDecoder::new(self.image.pixels()).decode()?)
    }
    /// Read the embedded header if it describes a message that fits this image
    pub fn stego_header(&self) -> Result<StegoHeader, StegErrors>
    {
        if self.image.pixels().is_empty()
        {
            return Err(StegErrors::NoPixelData);
        }
        Ok(ParityDecoder::new(self.image.pixels()).read_valid_header()?)
    }
    /// Serialize the document to `sink`
    ///
    /// The header is written exactly as it was read.
    /// Returns the number of bytes written.
    pub fn save<W: Write>(&self, sink: &mut W) -> Result<usize, StegErrors>
    {
        if self.image.pixels().is_empty()
        {
            return Err(StegErrors::NoPixelData);
        }
        let written = PpmEncoder::new(self.image.raw_header())?.encode(self.image.pixels(), sink)?;

        debug!("Serialized {} bytes", written);

        Ok(written)
    }
    /// Write the document to a `.ppm` file
    ///
    /// Refuses to write a document that carries no message
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<usize, StegErrors>
    {
        let path = path.as_ref();

        if !self.modified
        {
            return Err(StegErrors::NotModified);
        }
        check_extension(path)?;

        let mut sink = BufWriter::new(File::create(path)?);
        let written = self.save(&mut sink)?;

        sink.flush()?;

        info!("Wrote {} bytes to {}", written, path.display());

        Ok(written)
    }

    pub fn pixels(&self) -> &PixelBuffer
    {
        self.image.pixels()
    }
    pub fn width(&self) -> usize
    {
        self.image.width()
    }
    pub fn height(&self) -> usize
    {
        self.image.height()
    }
    pub fn dimensions(&self) -> (usize, usize)
    {
        self.image.dimensions()
    }
    pub fn kind(&self) -> PpmKind
    {
        self.image.kind()
    }
    pub fn raw_header(&self) -> &[u8]
    {
        self.image.raw_header()
    }
    pub fn max_value(&self) -> usize
    {
        self.image.max_value()
    }
    /// Whether a message has been embedded since loading
    pub const fn is_modified(&self) -> bool
    {
        self.modified
    }
    /// Longest message, in characters, that fits at `depth`
    pub fn capacity(&self, depth: usize) -> usize
    {
        max_message_len(self.image.pixels().len(), depth)
    }
    /// Largest depth at which a message of `chars` characters fits
    pub fn max_depth(&self, chars: usize) -> Option<usize>
    {
        max_depth(self.image.pixels().len(), chars)
    }
}

impl From<PpmImage> for PpmDocument
{
    fn from(image: PpmImage) -> Self
    {
        PpmDocument {
            image,
            modified: false
        }
    }
}

/// Check that `path` names a `.ppm` file, ignoring case
pub fn check_extension(path: &Path) -> Result<(), StegErrors>
{
    let is_ppm = path
        .extension()
        .and_then(OsStr::to_str)
        .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));

    if !is_ppm
    {
        return Err(StegErrors::InvalidExtension(path.to_path_buf()));
    }
    Ok(())
}
