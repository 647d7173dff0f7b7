/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use steg_core::options::DecoderOptions;
use steg_ppm::{PpmDecodeErrors, PpmDecoder, PpmEncoder};

use crate::{ppm_path, test_entries};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm() {
    let default_path = ppm_path();
    let mut error = false;
    let mut files = Vec::new();

    for entry in test_entries() {
        let file_name = default_path.join(&entry.name);
        let file_contents = read(&file_name).unwrap();

        let image = PpmDecoder::new(&file_contents).decode().unwrap();

        let mut mismatches = Vec::new();

        if image.kind() != entry.kind.to_kind() {
            mismatches.push(format!("kind {} ", image.kind()));
        }
        if image.dimensions() != (entry.width, entry.height) {
            mismatches.push(format!("dimensions {:?}", image.dimensions()));
        }
        let bytes = PpmEncoder::new(image.raw_header())
            .unwrap()
            .encode_to_vec(image.pixels())
            .unwrap();

        if entry.canonical && bytes != file_contents {
            mismatches.push(String::from("serialized bytes differ"));
        }
        // values must survive even when formatting does not
        let reparsed = PpmDecoder::new(&bytes).decode().unwrap();

        if reparsed.pixels() != image.pixels() {
            mismatches.push(String::from("pixels differ after a round trip"));
        }
        if !mismatches.is_empty() {
            error = true;
            files.push(entry.name.clone());
            eprintln!(
                "Mismatch for file {:?}\n{:#?}\nConfig:{:#?}\n",
                file_name, mismatches, entry
            );
        }
    }
    if error {
        panic!("Errors found during test decoding\n{:#?}", files);
    }
}

#[test]
fn legacy_header_agrees_with_standard_header() {
    let options = DecoderOptions::default().set_legacy_header(true);

    for entry in test_entries().iter().filter(|entry| entry.legacy) {
        let file_contents = read(ppm_path().join(&entry.name)).unwrap();

        let standard = PpmDecoder::new(&file_contents).decode().unwrap();
        let legacy = PpmDecoder::new_with_options(options, &file_contents)
            .decode()
            .unwrap();

        assert_eq!(standard, legacy, "{}", entry.name);
    }
}

#[test]
fn legacy_header_misreads_three_line_headers() {
    // the fourth newline is the first byte of the body
    let file_contents = read(ppm_path().join("plain_p6.ppm")).unwrap();
    let options = DecoderOptions::default().set_legacy_header(true);

    let err = PpmDecoder::new_with_options(options, &file_contents)
        .decode()
        .unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::MalformedDimensions(_)));
}

#[test]
fn truncated_file_is_reported() {
    let file_contents = read(ppm_path().join("truncated_p6.ppm")).unwrap();
    let err = PpmDecoder::new(&file_contents).decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::TruncatedPixelData(1)));
}
