/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use steg_image::steg_codec::capacity::MIN_DEPTH;
use steg_image::PpmDocument;

/// What `probe` reports for a single file
pub struct Metadata<'a>
{
    file:     &'a Path,
    size:     u64,
    document: &'a PpmDocument
}

impl<'a> Metadata<'a>
{
    pub fn new(file: &'a Path, size: u64, document: &'a PpmDocument) -> Metadata<'a>
    {
        Metadata { file, size, document }
    }
}

impl<'a> Serialize for Metadata<'a>
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // a header is only reported if it describes a message that fits
        let header = self.document.stego_header().ok();

        let mut state = serializer.serialize_struct("Metadata", 9)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("kind", &self.document.kind().to_string())?;
        state.serialize_field("width", &self.document.width())?;
        state.serialize_field("height", &self.document.height())?;
        state.serialize_field("pixels", &self.document.pixels().len())?;
        state.serialize_field("capacity", &self.document.capacity(MIN_DEPTH))?;
        state.serialize_field("message_bits", &header.map(|h| h.message_bits()))?;
        state.serialize_field("message_depth", &header.map(|h| h.depth()))?;

        state.end()
    }
}

#[cfg(test)]
mod tests
{
    use std::path::Path;

    use steg_image::load_document;

    use crate::serde::Metadata;

    #[test]
    fn reports_capacity_and_embedded_header()
    {
        let mut file = b"P6\n5 4\n255\n".to_vec();
        file.extend_from_slice(&[0; 60]);

        let mut document = load_document(&file).unwrap();
        let path = Path::new("hidden.ppm");

        let json = serde_json::to_value(Metadata::new(path, 71, &document)).unwrap();

        assert_eq!(json["kind"], "P6");
        assert_eq!(json["pixels"], 20);
        assert_eq!(json["capacity"], 3);
        // an all black image decodes to a zero length message at depth zero
        assert!(json["message_depth"].is_null());

        document.encode_message("Hi", 11).unwrap();
        let json = serde_json::to_value(Metadata::new(path, 71, &document)).unwrap();

        assert_eq!(json["message_bits"], 16);
        assert_eq!(json["message_depth"], 11);
        assert_eq!(json["file"], "hidden.ppm");
    }
}
