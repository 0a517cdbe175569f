use std::path::PathBuf;
use std::process;

use clap::Parser;

use polaframe_core::feathering::domain::feather_spec::FeatherSpec;
use polaframe_core::framing::domain::border_spec::{BorderSpec, RatioBasis};
use polaframe_core::imaging::domain::image_writer::{Compression, EncodeOptions};
use polaframe_core::pipeline::batch_executor::BatchExecutor;
use polaframe_core::pipeline::batch_logger::LogBatchLogger;
use polaframe_core::pipeline::frame_config::FrameConfig;
use polaframe_core::pipeline::frame_image_use_case::FrameImageUseCase;
use polaframe_core::pipeline::infrastructure::threaded_batch_executor::ThreadedBatchExecutor;
use polaframe_core::shared::color::Rgba16;
use polaframe_core::shared::constants::DEFAULT_OUTPUT_MARKER;

/// Adds proportional borders to photographs, optionally feathering the seam.
#[derive(Parser)]
#[command(name = "polaframe")]
struct Cli {
    /// Input image files. Each is written next to itself with the output marker.
    files: Vec<PathBuf>,

    /// Feather strength in thousandths of the source width (0 disables).
    #[arg(short, long, default_value = "0")]
    edge: f64,

    /// Border proportions: instant, gallery or uniform.
    #[arg(long, default_value = "instant")]
    preset: String,

    /// Override the top border ratio.
    #[arg(long)]
    top: Option<f64>,

    /// Override the bottom border ratio.
    #[arg(long)]
    bottom: Option<f64>,

    /// Override the left border ratio.
    #[arg(long)]
    left: Option<f64>,

    /// Override the right border ratio.
    #[arg(long)]
    right: Option<f64>,

    /// Dimension the left/right ratios scale with: width, height, shorter or longer.
    #[arg(long)]
    side_basis: Option<String>,

    /// Border color as RRGGBB or RRGGBBAA hex.
    #[arg(long, default_value = "ffffff")]
    background: String,

    /// Suffix replacing the input extension; inputs already ending in it are skipped.
    #[arg(long, default_value = DEFAULT_OUTPUT_MARKER)]
    marker: String,

    /// TIFF compression: deflate or none.
    #[arg(long, default_value = "deflate")]
    compression: String,

    /// Disable the horizontal differencing predictor.
    #[arg(long)]
    no_predictor: bool,

    /// Worker threads (defaults to the number of available CPUs).
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = build_config(&cli)?;
    let executor = match cli.jobs {
        Some(n) => ThreadedBatchExecutor::new(n),
        None => ThreadedBatchExecutor::with_available_parallelism(),
    };

    let use_case = FrameImageUseCase::from_config(config);
    let job = |path: &std::path::Path| use_case.execute(path);
    let mut logger = LogBatchLogger::default();
    let report = executor.run(&cli.files, &job, &mut logger);

    if !report.is_success() {
        log::warn!(
            "{} of {} file(s) failed",
            report.failed.len(),
            report.total()
        );
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<FrameConfig, Box<dyn std::error::Error>> {
    let mut borders = parse_preset(&cli.preset);
    if let Some(basis) = &cli.side_basis {
        borders = borders.with_side_basis(parse_ratio_basis(basis));
    }
    if let Some(r) = cli.top {
        borders = borders.with_top(r)?;
    }
    if let Some(r) = cli.bottom {
        borders = borders.with_bottom(r)?;
    }
    if let Some(r) = cli.left {
        borders = borders.with_left(r)?;
    }
    if let Some(r) = cli.right {
        borders = borders.with_right(r)?;
    }

    let background = Rgba16::from_hex(&cli.background)
        .ok_or_else(|| format!("Invalid background color '{}'", cli.background))?;

    Ok(FrameConfig {
        borders,
        feather: FeatherSpec::new(cli.edge),
        background,
        encode: EncodeOptions {
            compression: parse_compression(&cli.compression),
            predictor: !cli.no_predictor,
        },
        marker: cli.marker.clone(),
    })
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.edge.is_finite() || cli.edge < 0.0 {
        return Err(format!(
            "Edge strength must be a non-negative number, got {}",
            cli.edge
        )
        .into());
    }
    let valid_presets = ["instant", "gallery", "uniform"];
    if !valid_presets.contains(&cli.preset.as_str()) {
        return Err(format!(
            "Preset must be one of: instant, gallery, uniform, got '{}'",
            cli.preset
        )
        .into());
    }
    if let Some(basis) = &cli.side_basis {
        let valid_bases = ["width", "height", "shorter", "longer"];
        if !valid_bases.contains(&basis.as_str()) {
            return Err(format!(
                "Side basis must be one of: width, height, shorter, longer, got '{basis}'"
            )
            .into());
        }
    }
    for (name, ratio) in [
        ("top", cli.top),
        ("bottom", cli.bottom),
        ("left", cli.left),
        ("right", cli.right),
    ] {
        if let Some(r) = ratio {
            if !r.is_finite() || r < 0.0 {
                return Err(format!("--{name} must be a non-negative ratio, got {r}").into());
            }
        }
    }
    if cli.compression != "deflate" && cli.compression != "none" {
        return Err(format!(
            "Compression must be 'deflate' or 'none', got '{}'",
            cli.compression
        )
        .into());
    }
    if cli.marker.is_empty() || cli.marker.contains(std::path::is_separator) {
        return Err(format!("Invalid output marker '{}'", cli.marker).into());
    }
    if cli.jobs == Some(0) {
        return Err("--jobs must be at least 1".into());
    }
    Ok(())
}

fn parse_preset(preset: &str) -> BorderSpec {
    match preset {
        "gallery" => BorderSpec::gallery(),
        "uniform" => BorderSpec::uniform(),
        _ => BorderSpec::instant(),
    }
}

fn parse_ratio_basis(basis: &str) -> RatioBasis {
    match basis {
        "height" => RatioBasis::Height,
        "shorter" => RatioBasis::ShorterSide,
        "longer" => RatioBasis::LongerSide,
        _ => RatioBasis::Width,
    }
}

fn parse_compression(compression: &str) -> Compression {
    if compression == "none" {
        Compression::Uncompressed
    } else {
        Compression::Deflate
    }
}
