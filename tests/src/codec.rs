/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use steg_codec::capacity::{max_depth, max_message_len, pixels_for_bits, MIN_DEPTH};
use steg_codec::{ParityDecoder, ParityEncoder, StegoErrors};
use steg_core::pixels::{PixelBuffer, Rgb};

fn random_pixels(rng: &mut nanorand::WyRand, len: usize) -> PixelBuffer {
    let mut channels = vec![0_u8; len * 3];
    rng.fill(&mut channels);

    PixelBuffer::from_channels(&channels).unwrap()
}

fn random_message(rng: &mut nanorand::WyRand, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.generate_range(0_u8..=0x7F)))
        .collect()
}

#[test]
fn random_round_trips() {
    let mut rng = nanorand::WyRand::new_seed(0x5EED);

    for _ in 0..200 {
        let pixel_count = rng.generate_range(11_usize..2000);
        let original = random_pixels(&mut rng, pixel_count);

        let depth = rng.generate_range(MIN_DEPTH..=pixel_count);
        let capacity = max_message_len(pixel_count, depth);
        let len = rng.generate_range(0..=capacity);
        let message = random_message(&mut rng, len);

        let mut pixels = original.clone();
        let header = ParityEncoder::new(&message, depth)
            .encode(&mut pixels)
            .unwrap();

        let decoder = ParityDecoder::new(&pixels);

        // header fidelity
        assert_eq!(decoder.read_header().unwrap(), header);
        assert_eq!(header.message_bits(), message.len() * 8);
        assert_eq!(header.depth(), depth);
        // round trip
        assert_eq!(decoder.decode().unwrap(), message);
        // parity bound
        for (before, after) in original.channels().iter().zip(pixels.channels()) {
            assert!(before.abs_diff(*after) <= 1);
        }
    }
}

#[test]
fn untouched_channels_stay_untouched() {
    let mut rng = nanorand::WyRand::new_seed(42);
    let original = random_pixels(&mut rng, 100);
    let mut pixels = original.clone();

    ParityEncoder::new("abc", 50).encode(&mut pixels).unwrap();

    let payload_end = 50 + pixels_for_bits(24);

    for index in (11..50).chain(payload_end..100) {
        assert_eq!(pixels[index], original[index], "pixel {index}");
    }
}

#[test]
fn hi_on_a_four_by_four_black_image_does_not_fit() {
    // header takes 11 pixels, "Hi" needs 6 more from depth 11
    let mut pixels = PixelBuffer::filled(Rgb::default(), 16);
    let err = ParityEncoder::new("Hi", 11).encode(&mut pixels).unwrap_err();

    assert!(matches!(
        err,
        StegoErrors::CapacityExceeded {
            needed:    17,
            available: 16
        }
    ));
    assert_eq!(pixels, PixelBuffer::filled(Rgb::default(), 16));

    // one more row of pixels and it does
    let mut pixels = PixelBuffer::filled(Rgb::default(), 20);
    ParityEncoder::new("Hi", 11).encode(&mut pixels).unwrap();

    assert_eq!(ParityDecoder::new(&pixels).decode().unwrap(), "Hi");
}

#[test]
fn capacity_boundary() {
    for pixel_count in [17_usize, 40, 333] {
        let chars = max_message_len(pixel_count, MIN_DEPTH);
        let message = "x".repeat(chars);
        let depth = max_depth(pixel_count, chars).unwrap();

        let mut pixels = PixelBuffer::filled(Rgb::new(128, 128, 128), pixel_count);
        assert!(ParityEncoder::new(&message, depth).encode(&mut pixels).is_ok());

        let err = ParityEncoder::new(&message, depth + 1)
            .encode(&mut pixels)
            .unwrap_err();
        assert!(matches!(err, StegoErrors::CapacityExceeded { .. }));
    }
}

#[test]
fn depth_boundary() {
    let mut pixels = PixelBuffer::filled(Rgb::default(), 64);

    let err = ParityEncoder::new("A", 10).encode(&mut pixels).unwrap_err();
    assert!(matches!(err, StegoErrors::DepthTooSmall(10)));

    let err = ParityEncoder::new("A", 5).encode(&mut pixels).unwrap_err();
    assert!(matches!(err, StegoErrors::DepthTooSmall(5)));

    assert!(ParityEncoder::new("A", 11).encode(&mut pixels).is_ok());
}

#[test]
fn single_character_length_field() {
    let mut pixels = PixelBuffer::filled(Rgb::default(), 64);
    ParityEncoder::new("A", 11).encode(&mut pixels).unwrap();

    let length_field: String = pixels.channels()[..16]
        .iter()
        .map(|channel| if channel % 2 == 1 { '1' } else { '0' })
        .collect();

    assert_eq!(length_field, "0000000000001000");
}

#[test]
fn random_buffers_never_panic() {
    let mut rng = nanorand::WyRand::new_seed(7);
    let mut malformed_length = 0;

    for _ in 0..2000 {
        let pixel_count = rng.generate_range(0_usize..64);
        let pixels = random_pixels(&mut rng, pixel_count);
        let decoder = ParityDecoder::new(&pixels);

        if let Ok(header) = decoder.read_header() {
            if header.message_bits() % 8 != 0 {
                malformed_length += 1;
                assert!(matches!(
                    decoder.decode(),
                    Err(StegoErrors::MalformedBitstream(_))
                ));
            }
        }
        let _ = decoder.decode();
    }
    assert!(malformed_length > 0);
}
