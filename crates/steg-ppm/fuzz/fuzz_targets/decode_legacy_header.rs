#![no_main]

use libfuzzer_sys::fuzz_target;
use steg_ppm::steg_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::default().set_legacy_header(true);
    let mut decoder = steg_ppm::PpmDecoder::new_with_options(options, data);
    let _ = decoder.decode();
});
