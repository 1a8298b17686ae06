//! ppmfilter CLI - command-line driver for ppmfilter-core
//!
//! Parses flags into an immutable [`Options`] value, then runs a single
//! read / transform / write pass over one plain PPM file.
//!
//! # Usage
//!
//! ```text
//! ppmfilter --file photo.ppm -h -g -f rb
//! # writes photo_transformed.ppm
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info};
use ppmfilter_core::{read_ppm_file, write_ppm_file, ChannelMask, Transforms};

/// Appended to the source file stem to name the output.
pub const OUTPUT_SUFFIX: &str = "_transformed";

/// Command-line flags.
///
/// `-h` selects the horizontal flip, so help is only available as `--help`.
#[derive(Parser, Debug)]
#[command(
    name = "ppmfilter",
    about = "Apply simple filters to a plain-text (P3) PPM image",
    version,
    disable_help_flag = true
)]
pub struct Cli {
    /// Plain PPM image to process.
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Flip the image horizontally.
    #[arg(short = 'h')]
    pub flip_horizontal: bool,

    /// Flip the image vertically.
    #[arg(short = 'v')]
    pub flip_vertical: bool,

    /// Convert the image to grayscale.
    #[arg(short = 'g')]
    pub grayscale: bool,

    /// Invert the image colors.
    #[arg(short = 'i')]
    pub invert: bool,

    /// Flatten the given colors; any combination of r, g and b.
    #[arg(short = 'f', value_name = "COLORS")]
    pub flatten: Option<String>,

    /// Apply an extreme contrast filter.
    #[arg(short = 'x')]
    pub extreme_contrast: bool,

    /// Write here instead of `<name>_transformed.<ext>` next to the source.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub transforms: Transforms,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        let transforms = Transforms {
            flip_horizontal: cli.flip_horizontal,
            flip_vertical: cli.flip_vertical,
            grayscale: cli.grayscale,
            invert: cli.invert,
            flatten: cli
                .flatten
                .as_deref()
                .map(ChannelMask::parse)
                .unwrap_or_default(),
            extreme_contrast: cli.extreme_contrast,
        };
        let output = cli.output.unwrap_or_else(|| transformed_path(&cli.file));
        Self {
            input: cli.file,
            output,
            transforms,
        }
    }
}

/// Output path for `input`: the suffix goes between the stem and extension.
///
/// `dir/photo.ppm` becomes `dir/photo_transformed.ppm`; a source without an
/// extension just gets the suffix.
pub fn transformed_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Decode the input, apply the selected transforms and write the output.
///
/// # Errors
///
/// Fails if the output would overwrite the input, if the input cannot be
/// read or decoded, or if the output cannot be written.
pub fn run(options: &Options) -> Result<()> {
    if same_file(&options.input, &options.output) {
        bail!(
            "Output {} would overwrite the source image",
            options.output.display()
        );
    }

    let grid = read_ppm_file(&options.input)
        .with_context(|| format!("Failed to load {}", options.input.display()))?;
    info!(
        "Loaded {} ({}x{})",
        options.input.display(),
        grid.width(),
        grid.height()
    );

    if options.transforms.is_identity() {
        debug!("No transforms selected; copying pixels unchanged");
    }
    let grid = options.transforms.apply(grid);

    write_ppm_file(&options.output, &grid)
        .with_context(|| format!("Failed to save {}", options.output.display()))?;
    info!("Wrote {}", options.output.display());

    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
