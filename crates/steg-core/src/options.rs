/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which the PPM decoder
//! and the document layer get shared options for decoding
//!

/// Decoder options
///
/// Each option specifies what it influences
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderOptions
{
    /// Maximum width for which the decoder will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:     usize,
    /// Maximum height for which the decoder will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:    usize,
    /// Whether the decoder should reject images that
    /// are readable but not strictly conformant,
    /// e.g a max value other than 255
    ///
    /// - Default value: false
    strict_mode:   bool,
    /// Treat everything up to the fourth newline as the header
    /// and read dimensions from the third line.
    ///
    /// This reproduces the layout written by image editors that
    /// emit a comment line after the magic bytes, byte for byte,
    /// even when the file does not actually follow it.
    ///
    /// - Default value: false
    legacy_header: bool
}

impl Default for DecoderOptions
{
    fn default() -> Self
    {
        Self {
            max_width:     1 << 14,
            max_height:    1 << 14,
            strict_mode:   false,
            legacy_header: false
        }
    }
}

impl DecoderOptions
{
    /// Options suited for the command line, i.e lenient and
    /// without any dimension restriction
    pub fn new_cmd() -> DecoderOptions
    {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }
    /// Strict options, reject anything not conformant
    pub fn new_strict() -> DecoderOptions
    {
        DecoderOptions::default().set_strict_mode(true)
    }
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize
    {
        self.max_width
    }
    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize
    {
        self.max_height
    }
    /// Return true whether the decoder should be in strict mode
    pub const fn get_strict_mode(&self) -> bool
    {
        self.strict_mode
    }
    /// Return true if the four line header layout is in use
    pub const fn get_legacy_header(&self) -> bool
    {
        self.legacy_header
    }
    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self
    {
        self.max_width = width;
        self
    }
    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self
    {
        self.max_height = height;
        self
    }
    /// Set whether the decoder should be in strict mode
    pub fn set_strict_mode(mut self, yes: bool) -> Self
    {
        self.strict_mode = yes;
        self
    }
    /// Set whether the header ends at the fourth newline
    pub fn set_legacy_header(mut self, yes: bool) -> Self
    {
        self.legacy_header = yes;
        self
    }
}
