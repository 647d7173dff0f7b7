/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use steg_codec::StegoErrors;
use steg_ppm::{PpmDecodeErrors, PpmEncodeErrors};

/// All errors possible when working with a document
pub enum StegErrors
{
    /// The file name does not end in `.ppm`
    InvalidExtension(PathBuf),
    /// The document has no pixels to work on
    NoPixelData,
    /// Saving was requested but no message was embedded
    NotModified,
    /// Embedding needs samples that range up to 255
    UnsupportedMaxValue(usize),
    PpmDecodeErrors(PpmDecodeErrors),
    PpmEncodeErrors(PpmEncodeErrors),
    StegoErrors(StegoErrors),
    IoErrors(std::io::Error),
    /// Errors raised by callers, e.g the command line
    GenericString(String)
}

impl Debug for StegErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::InvalidExtension(ref path) =>
            {
                writeln!(f, "{} is not a .ppm file", path.display())
            }
            Self::NoPixelData =>
            {
                writeln!(f, "Document has no pixel data")
            }
            Self::NotModified =>
            {
                writeln!(f, "Nothing to save, no message has been encoded")
            }
            Self::UnsupportedMaxValue(value) =>
            {
                writeln!(
                    f,
                    "Cannot hide a message in an image with max value {value}, only 255 is supported"
                )
            }
            Self::PpmDecodeErrors(ref error) =>
            {
                writeln!(f, "PPM decoding failed: {:?}", error)
            }
            Self::PpmEncodeErrors(ref error) =>
            {
                writeln!(f, "PPM encoding failed: {:?}", error)
            }
            Self::StegoErrors(ref error) =>
            {
                writeln!(f, "{:?}", error)
            }
            Self::IoErrors(ref error) =>
            {
                writeln!(f, "I/O error: {}", error)
            }
            Self::GenericString(ref reason) =>
            {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl Display for StegErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for StegErrors {}

impl From<PpmDecodeErrors> for StegErrors
{
    fn from(from: PpmDecodeErrors) -> Self
    {
        StegErrors::PpmDecodeErrors(from)
    }
}

impl From<PpmEncodeErrors> for StegErrors
{
    fn from(from: PpmEncodeErrors) -> Self
    {
        StegErrors::PpmEncodeErrors(from)
    }
}

impl From<StegoErrors> for StegErrors
{
    fn from(from: StegoErrors) -> Self
    {
        StegErrors::StegoErrors(from)
    }
}

impl From<std::io::Error> for StegErrors
{
    fn from(from: std::io::Error) -> Self
    {
        StegErrors::IoErrors(from)
    }
}

impl From<String> for StegErrors
{
    fn from(from: String) -> Self
    {
        StegErrors::GenericString(from)
    }
}
