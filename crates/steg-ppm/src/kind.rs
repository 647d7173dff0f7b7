/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

/// The supported PPM variants
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PpmKind
{
    /// `P3`, channels stored as decimal text
    Ascii,
    /// `P6`, channels stored as raw bytes
    Binary
}

impl PpmKind
{
    /// The two magic bytes that open a file of this kind
    pub const fn magic(self) -> &'static [u8; 2]
    {
        match self
        {
            PpmKind::Ascii => b"P3",
            PpmKind::Binary => b"P6"
        }
    }
    /// Match the first two bytes of a file to a kind
    pub fn from_magic(magic: &[u8]) -> Option<PpmKind>
    {
        match magic
        {
            b"P3" => Some(PpmKind::Ascii),
            b"P6" => Some(PpmKind::Binary),
            _ => None
        }
    }
}

impl Display for PpmKind
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Self::Ascii => write!(f, "P3"),
            Self::Binary => write!(f, "P6")
        }
    }
}
