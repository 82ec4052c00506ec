use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use inkpack_core::{
    convert_file, write_preview_png, ConvertOptions, Dither, Encoding, FilterType, PanelConfig,
};

#[derive(FromArgs, Debug)]
/// Convert an image into a packed e-paper bitmap
struct Args {
    /// source image (PNG, JPEG, BMP or GIF)
    #[argh(positional)]
    input: PathBuf,

    /// destination for the packed stream; overwritten if present
    #[argh(positional)]
    output: PathBuf,

    /// output encoding: 1bpp or 4bpp
    #[argh(option, short = 'm', default = "Encoding::OneBit", from_str_fn(parse_encoding))]
    mode: Encoding,

    /// dithering for 1bpp: floyd-steinberg, bayer or threshold
    #[argh(option, short = 'd', from_str_fn(parse_dither))]
    dither: Option<Dither>,

    /// cutoff for threshold dithering (0-255)
    #[argh(option, short = 't')]
    threshold: Option<u8>,

    /// resampling filter: nearest, bilinear, bicubic or lanczos3
    #[argh(option, short = 'f', default = "FilterType::Bicubic", from_str_fn(parse_filter))]
    filter: FilterType,

    /// panel description as JSON; defaults to the 1200x825 Inkplate 10
    #[argh(option, short = 'p')]
    panel: Option<PathBuf>,

    /// also write a PNG rendering of the packed output here
    #[argh(option)]
    preview: Option<PathBuf>,

    /// log debug output
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn parse_encoding(value: &str) -> Result<Encoding, String> {
    value.parse().map_err(|e: inkpack_core::ConvertError| e.to_string())
}

fn parse_dither(value: &str) -> Result<Dither, String> {
    value.parse().map_err(|e: inkpack_core::ConvertError| e.to_string())
}

fn parse_filter(value: &str) -> Result<FilterType, String> {
    value.parse().map_err(|e: inkpack_core::ConvertError| e.to_string())
}

impl Args {
    /// Fold the individual flags into pipeline options.
    fn convert_options(&self) -> Result<ConvertOptions> {
        let dither = match (self.dither, self.threshold) {
            (None, Some(cutoff)) | (Some(Dither::Threshold(_)), Some(cutoff)) => {
                Dither::Threshold(cutoff)
            }
            (Some(other), Some(_)) => {
                bail!("--threshold only applies to threshold dithering, not {}", other)
            }
            (dither, None) => dither.unwrap_or_default(),
        };
        if self.mode == Encoding::FourBit && (self.dither.is_some() || self.threshold.is_some()) {
            log::warn!("dithering options are ignored for 4bpp output");
        }

        Ok(ConvertOptions {
            encoding: self.mode,
            dither,
            filter: self.filter,
        })
    }

    fn panel_config(&self) -> Result<PanelConfig> {
        match &self.panel {
            Some(path) => PanelConfig::load(path)
                .with_context(|| format!("failed to load panel config {}", path.display())),
            None => Ok(PanelConfig::default()),
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.panel_config()?;
    let options = args.convert_options()?;
    log::debug!(
        "panel {}x{}, {}, dither {}, filter {}",
        config.width,
        config.height,
        options.encoding,
        options.dither,
        options.filter
    );

    let report = convert_file(&args.input, &args.output, &config, &options).with_context(|| {
        format!(
            "failed to convert {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;
    log::info!(
        "source {}x{} packed into {} bytes",
        report.source_width,
        report.source_height,
        report.bytes_written
    );

    if let Some(preview) = &args.preview {
        write_preview(&args.output, preview, &config, options.encoding)?;
    }
    Ok(())
}

/// Render the stream as written to disk, so the preview shows what the panel reads.
fn write_preview(
    packed: &Path,
    preview: &Path,
    config: &PanelConfig,
    encoding: Encoding,
) -> Result<()> {
    let bytes = std::fs::read(packed)
        .with_context(|| format!("failed to read back {}", packed.display()))?;
    write_preview_png(preview, &bytes, config, encoding)
        .with_context(|| format!("failed to write preview {}", preview.display()))?;
    log::info!("preview written to {}", preview.display());
    Ok(())
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
