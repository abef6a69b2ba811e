//! Interactive mode, used when no profile reference is given on the command line.

use anyhow::{bail, Result};
use scrapetrain_core::scrape::RunOptions;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Asks for the profile reference, output directory, overwrite flag and album tag.
///
/// Blank answers keep the values in `defaults`. The reference is asked again
/// until something non-blank is entered; end of input aborts.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: &RunOptions,
) -> Result<(String, RunOptions)> {
    let reference = loop {
        let answer = read_answer(input, output, "Profile URL, name or .txt list: ")?;
        if !answer.is_empty() {
            break answer;
        }
    };

    let dir = read_answer(
        input,
        output,
        &format!("Output directory [{}]: ", defaults.output_dir.display()),
    )?;
    let overwrite = read_answer(
        input,
        output,
        if defaults.overwrite {
            "Overwrite existing files? [Y/n]: "
        } else {
            "Overwrite existing files? [y/N]: "
        },
    )?;
    let album = read_answer(input, output, "Album tag (blank for none): ")?;

    let opts = RunOptions {
        output_dir: if dir.is_empty() {
            defaults.output_dir.clone()
        } else {
            PathBuf::from(dir)
        },
        overwrite: match overwrite.to_ascii_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => defaults.overwrite,
        },
        album: if album.is_empty() {
            defaults.album.clone()
        } else {
            Some(album)
        },
    };
    Ok((reference, opts))
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no input");
    }
    Ok(line.trim().to_string())
}
