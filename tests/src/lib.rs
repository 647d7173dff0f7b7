/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use steg_ppm::PpmKind;

mod codec;
mod document;
mod ppm;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    P3,
    P6
}

impl JsonKind {
    pub fn to_kind(self) -> PpmKind {
        match self {
            Self::P3 => PpmKind::Ascii,
            Self::P6 => PpmKind::Binary
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:      String,
    pub kind:      JsonKind,
    pub width:     usize,
    pub height:    usize,
    /// Message hidden in the file, none if the file carries no message
    pub message:   Option<String>,
    pub depth:     Option<usize>,
    /// Whether serializing reproduces the file byte for byte
    pub canonical: bool,
    /// Whether the file also parses with the four newline header rule
    #[serde(default)]
    pub legacy:    bool,
    pub comment:   Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

pub fn test_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/ppm.json");
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}
