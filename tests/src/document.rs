/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::PathBuf;

use steg_codec::StegoErrors;
use steg_core::options::DecoderOptions;
use steg_core::pixels::{PixelBuffer, Rgb};
use steg_image::{load_document, PpmDocument, StegErrors};
use steg_ppm::{PpmDecodeErrors, PpmKind};

use crate::{ppm_path, test_entries};

/// A file in the temporary directory that is removed on drop
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> TempFile {
        let path = std::env::temp_dir().join(format!("steg-tests-{}-{name}", std::process::id()));
        TempFile(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn hidden_messages_are_recovered() {
    for entry in test_entries() {
        let document = PpmDocument::open(ppm_path().join(&entry.name), DecoderOptions::default()).unwrap();

        match &entry.message {
            Some(message) => {
                assert_eq!(&document.decode_message().unwrap(), message, "{}", entry.name);
                assert_eq!(
                    document.stego_header().unwrap().depth(),
                    entry.depth.unwrap(),
                    "{}",
                    entry.name
                );
            }
            None => {
                let err = document.decode_message().unwrap_err();

                assert!(
                    matches!(err, StegErrors::StegoErrors(StegoErrors::MalformedBitstream(_))),
                    "{}",
                    entry.name
                );
            }
        }
    }
}

#[test]
fn encode_save_and_reload() {
    for entry in test_entries() {
        let mut document = PpmDocument::open(ppm_path().join(&entry.name), DecoderOptions::default()).unwrap();

        if document.pixels().len() < 11 {
            // too small to hold even the header
            continue;
        }
        let message = "x".repeat(document.capacity(11).min(5));

        document.encode_message(&message, 11).unwrap();

        let out = TempFile::new(&entry.name);
        let written = document.save_to_path(&out.0).unwrap();

        let bytes = read(&out.0).unwrap();
        assert_eq!(bytes.len(), written);

        let reloaded = load_document(&bytes).unwrap();

        assert_eq!(reloaded.kind(), entry.kind.to_kind());
        assert_eq!(reloaded.raw_header(), document.raw_header());
        assert_eq!(reloaded.decode_message().unwrap(), message, "{}", entry.name);
        assert!(!reloaded.is_modified());
    }
}

#[test]
fn open_checks_extension_first() {
    let err = PpmDocument::open("does-not-exist.png", DecoderOptions::default()).unwrap_err();
    assert!(matches!(err, StegErrors::InvalidExtension(_)));

    let err = PpmDocument::open("does-not-exist.PPM", DecoderOptions::default()).unwrap_err();
    assert!(matches!(err, StegErrors::IoErrors(_)));
}

#[test]
fn save_to_path_checks_extension() {
    let mut document = PpmDocument::new(PpmKind::Binary, 4, 4, PixelBuffer::filled(Rgb::default(), 16)).unwrap();
    document.encode_message("", 11).unwrap();

    let err = document.save_to_path("hidden.txt").unwrap_err();
    assert!(matches!(err, StegErrors::InvalidExtension(_)));
}

#[test]
fn parse_errors_surface_through_documents() {
    let file_contents = read(ppm_path().join("truncated_p6.ppm")).unwrap();
    let err = load_document(&file_contents).unwrap_err();

    assert!(matches!(
        err,
        StegErrors::PpmDecodeErrors(PpmDecodeErrors::TruncatedPixelData(_))
    ));

    let err = load_document(b"P5\n1 1\n255\n\0").unwrap_err();
    assert!(matches!(
        err,
        StegErrors::PpmDecodeErrors(PpmDecodeErrors::UnsupportedType(_))
    ));
}

#[test]
fn ascii_two_by_one_scenario() {
    let document = load_document(b"P3\n2 1\n255\n0\n0\n0\n255\n255\n255\n").unwrap();

    assert_eq!(document.dimensions(), (2, 1));
    assert_eq!(
        document.pixels().as_slice(),
        &[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]
    );
}

#[test]
fn binary_four_by_four_black_scenario() {
    let mut file = b"P6\n4 4\n255\n".to_vec();
    file.extend_from_slice(&[0; 48]);

    let mut document = load_document(&file).unwrap();

    // sixteen pixels are one short of header plus "Hi"
    let err = document.encode_message("Hi", 11).unwrap_err();
    assert!(matches!(
        err,
        StegErrors::StegoErrors(StegoErrors::CapacityExceeded { needed: 17, available: 16 })
    ));
    assert!(!document.is_modified());

    document.encode_message("H", 11).unwrap();
    assert_eq!(document.decode_message().unwrap(), "H");
}
