//! glyphcut - Extract glyph regions from a scanned image into PNG files
//!
//! Loads an image, binarizes it, finds the 4-connected foreground
//! components, and saves each component's bounding rectangle as its own
//! grayscale PNG, reporting the count and the saved paths on stdout.

use anyhow::{Context, Result, bail};
use glyphcut::io::{read_gray, write_crop};
use glyphcut::region::{BinarizeOptions, binarize, find_components, otsu_threshold};
use log::debug;
use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_IMAGE: &str = "scan.jpg";

const USAGE: &str = "\
Usage: glyphcut [IMAGE] [options]

Extracts each connected glyph of IMAGE (default: scan.jpg) into its own
glyph_<n>.png file.

Options:
  --threshold T   Normalized binarization threshold in [0, 1] (default 0.5)
  --otsu          Pick the threshold automatically (Otsu's method)
  --out-dir DIR   Directory for the output files (default: current directory)
  -h, --help      Show this help
";

#[derive(Debug)]
struct Args {
    image: PathBuf,
    threshold: Option<f32>,
    otsu: bool,
    out_dir: PathBuf,
    help: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        image: PathBuf::from(DEFAULT_IMAGE),
        threshold: None,
        otsu: false,
        out_dir: PathBuf::from("."),
        help: false,
    };

    let mut image_seen = false;
    let mut argv = env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => args.help = true,
            "--otsu" => args.otsu = true,
            "--threshold" => {
                let value = argv
                    .next()
                    .context("--threshold requires a value")?
                    .parse::<f32>()
                    .context("--threshold value is not a number")?;
                args.threshold = Some(value);
            }
            "--out-dir" => {
                args.out_dir = PathBuf::from(argv.next().context("--out-dir requires a value")?);
            }
            other if other.starts_with('-') => bail!("unknown option '{other}'\n\n{USAGE}"),
            other => {
                if image_seen {
                    bail!("unexpected argument '{other}'\n\n{USAGE}");
                }
                args.image = PathBuf::from(other);
                image_seen = true;
            }
        }
    }

    if args.otsu && args.threshold.is_some() {
        bail!("--otsu and --threshold are mutually exclusive");
    }
    Ok(args)
}

fn run() -> Result<()> {
    let args = parse_args()?;
    if args.help {
        print!("{USAGE}");
        return Ok(());
    }

    let gray = read_gray(&args.image)
        .with_context(|| format!("could not read {}", args.image.display()))?;

    let options = match args.threshold {
        Some(threshold) => BinarizeOptions { threshold },
        None if args.otsu => BinarizeOptions {
            threshold: otsu_threshold(&gray)?,
        },
        None => BinarizeOptions::default(),
    };
    debug!("binarizing with threshold {:.3}", options.threshold);

    let map = binarize(&gray, &options)?;
    let components = find_components(&map)?;
    println!("Found {} glyph(s).", components.len());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("could not create {}", args.out_dir.display()))?;

    let mut saved = 0usize;
    for component in &components {
        if component.bounds.is_empty() {
            continue;
        }
        let path = args.out_dir.join(format!("glyph_{saved}.png"));
        write_crop(&map, &component.bounds, &path)
            .with_context(|| format!("could not save {}", path.display()))?;
        println!("Glyph {} saved at {}", saved, path.display());
        saved += 1;
    }

    Ok(())
}

fn main() {
    env_logger::init();

    // Failures are reported on stdout and the process still exits 0,
    // matching the extractor this tool replaced
    if let Err(err) = run() {
        println!("Error: {err:#}");
    }
}
