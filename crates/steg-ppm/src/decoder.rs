/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use steg_core::bytestream::ZByteReader;
use steg_core::log::{debug, info};
use steg_core::options::DecoderOptions;
use steg_core::pixels::{PixelBuffer, CHANNELS};

use crate::errors::PpmDecodeErrors;
use crate::image::PpmImage;
use crate::kind::PpmKind;

/// Number of newlines that end a header in the legacy layout
const LEGACY_HEADER_LINES: usize = 4;

/// An instance of a PPM decoder
///
/// The decoder can currently decode P3 and P6 formats
pub struct PpmDecoder<'a>
{
    width:           usize,
    height:          usize,
    max_value:       usize,
    kind:            PpmKind,
    header_len:      usize,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PpmDecoder<'a>
{
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use steg_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PpmDecoder<'a>
    {
        PpmDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use steg_core::options::DecoderOptions;
    /// use steg_ppm::PpmDecoder;
    /// let options = DecoderOptions::default().set_legacy_header(true);
    /// let mut decoder = PpmDecoder::new_with_options(options, b"P6\n# comment\n1 1\n255\n\x01\x02\x03");
    ///
    /// assert_eq!(decoder.decode().unwrap().dimensions(), (1, 1));
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PpmDecoder<'a>
    {
        PpmDecoder {
            width: 0,
            height: 0,
            max_value: usize::from(u8::MAX),
            kind: PpmKind::Binary,
            header_len: 0,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// Return Err on Error otherwise return nothing,
    pub fn decode_headers(&mut self) -> Result<(), PpmDecodeErrors>
    {
        if self.decoded_headers
        {
            return Ok(());
        }
        if !self.reader.has(2)
        {
            return Err(PpmDecodeErrors::HeaderMissing);
        }
        let magic = [self.reader.get_u8(), self.reader.get_u8()];

        self.kind = PpmKind::from_magic(&magic).ok_or(PpmDecodeErrors::UnsupportedType(magic))?;

        info!("PPM type: {}", self.kind);

        if self.options.get_legacy_header()
        {
            self.decode_legacy_header()?;
        }
        else
        {
            self.decode_standard_header()?;
        }

        if self.width == 0 || self.height == 0
        {
            let msg = format!("Zero sized image {}x{}", self.width, self.height);
            return Err(PpmDecodeErrors::MalformedDimensions(msg));
        }
        if self.width > self.options.get_max_width()
        {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        if self.height > self.options.get_max_height()
        {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        info!("Width: {}, height: {}", self.width, self.height);

        self.header_len = self.reader.get_position();
        debug!("Header length: {} bytes", self.header_len);

        self.decoded_headers = true;

        Ok(())
    }
    /// Decode header fields following the netpbm grammar
    ///
    /// Whitespace and `#` comments may appear between fields and
    /// a single whitespace byte follows the max value.
    fn decode_standard_header(&mut self) -> Result<(), PpmDecodeErrors>
    {
        match self.reader.peek_u8()
        {
            None => return Err(PpmDecodeErrors::HeaderMissing),
            Some(byte) if !byte.is_ascii_whitespace() && byte != b'#' =>
            {
                let msg = format!("Expected whitespace after magic bytes but found '{}'", byte as char);
                return Err(PpmDecodeErrors::MalformedDimensions(msg));
            }
            _ => ()
        }
        self.width = self.get_integer("width")?;
        self.height = self.get_integer("height")?;

        let max_value = self.get_integer("max value")?;

        if max_value == 0 || max_value > 255
        {
            return Err(PpmDecodeErrors::UnsupportedMaxValue(max_value));
        }
        if self.options.get_strict_mode() && max_value != 255
        {
            return Err(PpmDecodeErrors::UnsupportedMaxValue(max_value));
        }
        debug!("Max value: {}", max_value);

        self.max_value = max_value;

        // exactly one whitespace separates the header from the pixels
        if self.reader.eof()
        {
            return Err(PpmDecodeErrors::HeaderMissing);
        }
        let byte = self.reader.get_u8();

        if !byte.is_ascii_whitespace()
        {
            let msg = format!("Expected whitespace after max value but found '{}'", byte as char);
            return Err(PpmDecodeErrors::MalformedDimensions(msg));
        }
        Ok(())
    }
    /// Decode the header as everything up to the fourth newline
    ///
    /// Dimensions are read from the third line as `<width> <height>`,
    /// the fourth line (max value) is not interpreted.
    fn decode_legacy_header(&mut self) -> Result<(), PpmDecodeErrors>
    {
        let mut newlines = 0;

        while newlines < LEGACY_HEADER_LINES
        {
            if self.reader.eof()
            {
                return Err(PpmDecodeErrors::HeaderMissing);
            }
            if self.reader.get_u8() == b'\n'
            {
                newlines += 1;
            }
        }

        let mut line = 0;
        let mut digits = Vec::with_capacity(8);
        let mut width = None;

        for &byte in self.reader.consumed()
        {
            if line == 3
            {
                break;
            }
            if line == 2 && byte != b'\n'
            {
                if byte == b' '
                {
                    width = Some(parse_dimension(&digits, "width")?);
                    digits.clear();
                }
                else
                {
                    digits.push(byte);
                }
            }
            if byte == b'\n'
            {
                line += 1;
            }
        }
        self.width = width.ok_or_else(|| {
            PpmDecodeErrors::MalformedDimensions(String::from(
                "No space between width and height on the dimension line"
            ))
        })?;
        self.height = parse_dimension(&digits, "height")?;

        Ok(())
    }
    /// Skip whitespace and comments, then read a decimal number
    fn get_integer(&mut self, field: &str) -> Result<usize, PpmDecodeErrors>
    {
        skip_spaces(&mut self.reader);

        match self.reader.peek_u8()
        {
            None => return Err(PpmDecodeErrors::HeaderMissing),
            Some(byte) if !byte.is_ascii_digit() =>
            {
                let msg = format!("Expected {field} but found '{}'", byte as char);
                return Err(PpmDecodeErrors::MalformedDimensions(msg));
            }
            _ => ()
        }
        let mut value = 0_usize;

        while let Some(byte) = self.reader.peek_u8()
        {
            if !byte.is_ascii_digit()
            {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                .ok_or_else(|| PpmDecodeErrors::MalformedDimensions(format!("{field} is too large")))?;

            self.reader.skip(1);
        }
        Ok(value)
    }

    /// Return the PPM type or none if headers
    /// are not decoded
    pub const fn kind(&self) -> Option<PpmKind>
    {
        if self.decoded_headers
        {
            Some(self.kind)
        }
        else
        {
            None
        }
    }
    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)>
    {
        if self.decoded_headers
        {
            Some((self.width, self.height))
        }
        else
        {
            None
        }
    }
    /// Return the raw header bytes or none if headers aren't decoded
    pub fn raw_header(&self) -> Option<&'a [u8]>
    {
        if self.decoded_headers
        {
            Some(&self.reader.consumed()[..self.header_len])
        }
        else
        {
            None
        }
    }
    /// Decode a ppm encoded file and return the image
    ///
    /// The returned image keeps the header bytes as they
    /// appeared in the stream.
    pub fn decode(&mut self) -> Result<PpmImage, PpmDecodeErrors>
    {
        self.decode_headers()?;

        let expected = self.width.checked_mul(self.height).ok_or_else(|| {
            PpmDecodeErrors::MalformedDimensions(format!(
                "{}x{} overflows",
                self.width, self.height
            ))
        })?;
        let header = self.reader.consumed()[..self.header_len].to_vec();
        let body = self.reader.remaining_bytes();

        let pixels = match self.kind
        {
            PpmKind::Ascii => decode_ascii_pixels(body, expected)?,
            PpmKind::Binary => decode_binary_pixels(body, expected)?
        };

        if pixels.len() != expected
        {
            return Err(PpmDecodeErrors::DimensionMismatch(expected, pixels.len()));
        }
        debug!("Decoded {} pixels", pixels.len());

        Ok(PpmImage::from_parts(
            self.kind,
            header,
            (self.width, self.height),
            self.max_value,
            pixels
        ))
    }
}

/// Pixels stored as three raw bytes each
fn decode_binary_pixels(body: &[u8], expected: usize) -> Result<PixelBuffer, PpmDecodeErrors>
{
    let dangling = body.len() % CHANNELS;

    if dangling != 0
    {
        return Err(PpmDecodeErrors::TruncatedPixelData(dangling));
    }
    if body.len() / CHANNELS != expected
    {
        return Err(PpmDecodeErrors::DimensionMismatch(
            expected,
            body.len() / CHANNELS
        ));
    }
    PixelBuffer::from_channels(body).ok_or(PpmDecodeErrors::TruncatedPixelData(dangling))
}

/// Pixels stored as whitespace separated decimal channels
fn decode_ascii_pixels(body: &[u8], expected: usize) -> Result<PixelBuffer, PpmDecodeErrors>
{
    let mut channels = Vec::with_capacity(expected.saturating_mul(CHANNELS).min(body.len()));

    for (position, token) in body
        .split(|byte| byte.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        channels.push(parse_channel(token, position)?);
    }
    let dangling = channels.len() % CHANNELS;

    if dangling != 0
    {
        return Err(PpmDecodeErrors::TruncatedPixelData(dangling));
    }
    PixelBuffer::from_channels(&channels).ok_or(PpmDecodeErrors::TruncatedPixelData(dangling))
}

fn parse_channel(token: &[u8], position: usize) -> Result<u8, PpmDecodeErrors>
{
    let invalid = || {
        PpmDecodeErrors::MalformedPixelData(format!(
            "Channel {position} `{}` is not a decimal between 0 and 255",
            String::from_utf8_lossy(token)
        ))
    };
    if token.len() > 3 || !token.iter().all(u8::is_ascii_digit)
    {
        return Err(invalid());
    }
    let value = token
        .iter()
        .fold(0_u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));

    u8::try_from(value).map_err(|_| invalid())
}

fn parse_dimension(digits: &[u8], field: &str) -> Result<usize, PpmDecodeErrors>
{
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit)
    {
        let msg = format!(
            "Expected {field} as a decimal number but found `{}`",
            String::from_utf8_lossy(digits)
        );
        return Err(PpmDecodeErrors::MalformedDimensions(msg));
    }
    digits.iter().try_fold(0_usize, |acc, digit| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(digit - b'0')))
            .ok_or_else(|| PpmDecodeErrors::MalformedDimensions(format!("{field} is too large")))
    })
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader)
{
    while let Some(byte) = byte_stream.peek_u8()
    {
        if byte == b'#'
        {
            // skip the whole comment
            while !byte_stream.eof() && byte_stream.get_u8() != b'\n' {}
        }
        else if byte.is_ascii_whitespace()
        {
            byte_stream.skip(1);
        }
        else
        {
            break;
        }
    }
}
