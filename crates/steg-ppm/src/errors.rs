/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};
use std::io;

/// Possible errors that may occur during decoding
pub enum PpmDecodeErrors
{
    /// The stream ended before the whole header was read
    HeaderMissing,
    /// The file does not start with `P3` or `P6`
    ///
    /// Contains the first two bytes found
    UnsupportedType([u8; 2]),
    /// Width or height is not a positive decimal number
    MalformedDimensions(String),
    /// Dimensions larger than what the options permit
    ///
    /// # Arguments
    /// - 1st argument is the configured limit
    /// - 2nd argument is the value found
    LargeDimensions(usize, usize),
    /// The max value is not one we can store in eight bits
    UnsupportedMaxValue(usize),
    /// The pixel body ends in the middle of a pixel
    ///
    /// Contains the number of dangling channels
    TruncatedPixelData(usize),
    /// An ASCII channel is not a decimal in `0..=255`
    MalformedPixelData(String),
    /// Number of pixels read does not match `width * height`
    ///
    /// # Arguments
    /// - 1st argument is the expected pixel count
    /// - 2nd argument is the pixel count found
    DimensionMismatch(usize, usize)
}

impl Debug for PpmDecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Self::HeaderMissing =>
            {
                writeln!(f, "Stream ended before the PPM header was complete")
            }
            Self::UnsupportedType(magic) =>
            {
                writeln!(
                    f,
                    "Unsupported PPM type `{}`, supported types are P3 and P6",
                    String::from_utf8_lossy(magic)
                )
            }
            Self::MalformedDimensions(reason) =>
            {
                writeln!(f, "Malformed dimensions, reason: {reason}")
            }
            Self::LargeDimensions(expected, found) =>
            {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::UnsupportedMaxValue(value) =>
            {
                writeln!(f, "Unsupported max value {value}, expected a value between 1 and 255")
            }
            Self::TruncatedPixelData(dangling) =>
            {
                writeln!(
                    f,
                    "Truncated pixel data, {dangling} trailing channel(s) do not form a full pixel"
                )
            }
            Self::MalformedPixelData(reason) =>
            {
                writeln!(f, "Malformed pixel data, reason: {reason}")
            }
            Self::DimensionMismatch(expected, found) =>
            {
                writeln!(f, "Expected {expected} pixels from the header but found {found}")
            }
        }
    }
}

impl Display for PpmDecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmDecodeErrors {}

/// Errors occurring during encoding
pub enum PpmEncodeErrors
{
    /// The header does not start with `P3` or `P6`
    UnsupportedType([u8; 2]),
    IoErrors(io::Error)
}

impl From<io::Error> for PpmEncodeErrors
{
    fn from(err: io::Error) -> Self
    {
        PpmEncodeErrors::IoErrors(err)
    }
}

impl Debug for PpmEncodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            PpmEncodeErrors::UnsupportedType(magic) =>
            {
                writeln!(
                    f,
                    "Cannot serialize PPM type `{}`, supported types are P3 and P6",
                    String::from_utf8_lossy(magic)
                )
            }
            PpmEncodeErrors::IoErrors(ref err) =>
            {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for PpmEncodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmEncodeErrors {}
