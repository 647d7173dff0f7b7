/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use steg_image::steg_codec::capacity::MIN_DEPTH;
use steg_image::{PpmDocument, StegErrors};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{read_message, StegFile};
use crate::probe_files::probe_input_files;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), StegErrors>
{
    match args.subcommand()
    {
        Some(("encode", sub_args)) => encode_file(sub_args, cmd_opts),
        Some(("decode", sub_args)) => decode_file(sub_args, cmd_opts),
        Some(("probe", sub_args)) => probe_input_files(sub_args, cmd_opts),
        _ => Err(StegErrors::GenericString(String::from(
            "No command given, see --help for usage"
        )))
    }
}

fn get_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path, StegErrors>
{
    args.get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .ok_or_else(|| StegErrors::GenericString(format!("Missing argument `{id}`")))
}

fn encode_file(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), StegErrors>
{
    let in_file = get_path(args, "in")?;
    let out_file = get_path(args, "out")?;
    let depth = args.get_one::<usize>("depth").copied().unwrap_or(MIN_DEPTH);

    verify_file_paths(in_file, out_file, cmd_opts)?;

    let message = read_message(args)?;
    let mut document = StegFile::new(in_file, cmd_opts.decoder_options).into_document()?;

    check_depth(&document, message.len(), depth)?;

    document.encode_message(&message, depth)?;
    document.save_to_path(out_file)?;

    info!("Message hidden in {:?}", out_file);

    Ok(())
}

/// Refuse depths outside the range a message of `chars` characters fits in
fn check_depth(document: &PpmDocument, chars: usize, depth: usize) -> Result<(), StegErrors>
{
    let max_depth = document.max_depth(chars).ok_or_else(|| {
        StegErrors::GenericString(format!(
            "Message of {} characters does not fit in {} pixels",
            chars,
            document.pixels().len()
        ))
    })?;

    info!(
        "Message of {} characters fits at depths {} to {}",
        chars, MIN_DEPTH, max_depth
    );

    if depth < MIN_DEPTH || depth > max_depth
    {
        return Err(StegErrors::GenericString(format!(
            "Depth {depth} is out of range, use a depth between {MIN_DEPTH} and {max_depth}"
        )));
    }
    Ok(())
}

fn decode_file(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), StegErrors>
{
    let in_file = get_path(args, "in")?;

    let document = StegFile::new(in_file, cmd_opts.decoder_options).into_document()?;
    let message = document.decode_message()?;

    debug!("Recovered {} characters", message.len());

    println!("{message}");

    Ok(())
}

fn verify_file_paths(in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions) -> Result<(), StegErrors>
{
    if in_path == out_path
    {
        return Err(StegErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }

    if !in_path.exists()
    {
        return Err(StegErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file()
    {
        return Err(StegErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }
    steg_image::check_extension(out_path)?;

    if out_path.exists()
    {
        if cmd_opts.override_files
        {
            info!("Overwriting path {:?} ", out_path);
        }
        else
        {
            println!("File {:?} exists, overwrite [y/N]", out_path);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y"
            {
                return Err(StegErrors::GenericString(format!(
                    "Not overwriting file {:?}",
                    out_path
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use std::path::Path;

    use steg_core::options::DecoderOptions;
    use steg_core::pixels::{PixelBuffer, Rgb};
    use steg_image::steg_ppm::PpmKind;
    use steg_image::{PpmDocument, StegErrors};

    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::workflow::{check_depth, verify_file_paths};

    fn options() -> CmdOptions
    {
        CmdOptions {
            decoder_options: DecoderOptions::new_cmd(),
            override_files:  true
        }
    }

    #[test]
    fn same_input_and_output_is_refused()
    {
        let path = Path::new("image.ppm");
        assert!(matches!(
            verify_file_paths(path, path, &options()),
            Err(StegErrors::GenericString(_))
        ));
    }

    #[test]
    fn missing_input_is_refused()
    {
        let err = verify_file_paths(
            Path::new("does/not/exist.ppm"),
            Path::new("out.ppm"),
            &options()
        )
        .unwrap_err();

        assert!(matches!(err, StegErrors::GenericString(_)));
    }

    #[test]
    fn depth_must_leave_room_for_the_message()
    {
        // 20 pixels, 9 after the header, "Hi" needs 6 of them
        let pixels = PixelBuffer::filled(Rgb::default(), 20);
        let document = PpmDocument::new(PpmKind::Binary, 5, 4, pixels).unwrap();

        assert!(check_depth(&document, 2, 11).is_ok());
        assert!(check_depth(&document, 2, 14).is_ok());

        for depth in [10, 15]
        {
            assert!(matches!(
                check_depth(&document, 2, depth),
                Err(StegErrors::GenericString(_))
            ));
        }
        assert!(matches!(
            check_depth(&document, 4, 11),
            Err(StegErrors::GenericString(_))
        ));
    }
}
