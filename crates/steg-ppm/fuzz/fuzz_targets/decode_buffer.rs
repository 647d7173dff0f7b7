#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = steg_ppm::PpmDecoder::new(data);

    if let Ok(image) = decoder.decode()
    {
        // anything we parse must serialize back to the same bytes
        let bytes = steg_ppm::PpmEncoder::new(image.raw_header())
            .and_then(|encoder| encoder.encode_to_vec(image.pixels()));

        if image.kind() == steg_ppm::PpmKind::Binary
        {
            assert_eq!(bytes.ok().as_deref(), Some(data));
        }
    }
});
