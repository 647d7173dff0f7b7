/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when hiding or recovering a message
use core::fmt::{Debug, Display, Formatter};

use crate::capacity::MIN_DEPTH;

/// Possible errors from the parity encoder and decoder
pub enum StegoErrors
{
    /// The message would start inside the header pixels
    DepthTooSmall(usize),
    /// Header and message do not fit in the pixel buffer
    CapacityExceeded
    {
        /// Pixels required for the header and message
        needed:    usize,
        /// Pixels in the buffer
        available: usize
    },
    /// A header field does not fit in sixteen bits
    ///
    /// Contains the field name and the value that overflowed
    FieldOverflow(&'static str, usize),
    /// The message contains a character outside of ASCII
    ///
    /// Contains the character and its position in the message
    UnsupportedCharacter(char, usize),
    /// The embedded bits do not describe a valid message
    MalformedBitstream(String)
}

impl Debug for StegoErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Self::DepthTooSmall(depth) =>
            {
                writeln!(
                    f,
                    "Depth {depth} overlaps the header, depth must be at least {MIN_DEPTH}"
                )
            }
            Self::CapacityExceeded { needed, available } =>
            {
                writeln!(
                    f,
                    "Message needs {needed} pixels but the image only has {available}"
                )
            }
            Self::FieldOverflow(field, value) =>
            {
                writeln!(
                    f,
                    "Header field `{field}` is {value}, which does not fit in 16 bits"
                )
            }
            Self::UnsupportedCharacter(character, position) =>
            {
                writeln!(
                    f,
                    "Character {character:?} at position {position} is not ASCII"
                )
            }
            Self::MalformedBitstream(reason) =>
            {
                writeln!(f, "No valid message found, reason: {reason}")
            }
        }
    }
}

impl Display for StegoErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for StegoErrors {}
