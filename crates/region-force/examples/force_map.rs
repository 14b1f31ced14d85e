//! Example: one force-map evaluation on a grayscale image.
//!
//! Loads an image, builds a mask (rectangle or intensity threshold), evaluates
//! the selected force model once and writes:
//! - `<stem>_force.png`: the force map, mid-gray at zero, darker where the
//!   force is negative (pixel favours the inside region);
//! - `<stem>_force.json`: model parameters plus summary statistics.
//!
//! Run from the workspace root:
//!   cargo run -p region-force --example force_map -- --help
//!   cargo run -p region-force --example force_map -- --input img.png --model local --sigma 2

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use image::{GrayImage, ImageReader, Luma};
use region_force::{
    BorderPolicy, ForceConfig, ForceModel, ForceSummary, Image, ImageForce, Mask, Region, to_f64,
};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ModelArg {
    Piecewise,
    Likelihood,
    Local,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BorderArg {
    Zero,
    Clamp,
    Reflect101,
}

#[derive(Parser, Debug)]
#[command(about = "Compute a region force map for one mask snapshot")]
struct Args {
    /// Input image, converted to 8-bit grayscale
    #[arg(long)]
    input: PathBuf,

    /// Force model (ignored when --config is given)
    #[arg(long, value_enum, default_value_t = ModelArg::Piecewise)]
    model: ModelArg,

    /// JSON model description, e.g. {"model": "local_gaussian", "sigma": 2}
    #[arg(long)]
    config: Option<PathBuf>,

    /// Outside weight
    #[arg(long, default_value_t = 1.0)]
    k0: f64,

    /// Inside weight
    #[arg(long, default_value_t = 1.0)]
    k1: f64,

    /// Gaussian standard deviation of the local model, in pixels
    #[arg(long, default_value_t = 2)]
    sigma: u32,

    /// Border policy of the local model's blurs
    #[arg(long, value_enum, default_value_t = BorderArg::Zero)]
    border: BorderArg,

    /// Inside rectangle as `x,y,w,h` (default: centered half-size box)
    #[arg(long, conflicts_with = "threshold")]
    rect: Option<String>,

    /// Inside = pixels with gray value >= threshold
    #[arg(long)]
    threshold: Option<u8>,

    /// Output directory (default: next to the input)
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report {
    input: String,
    config: ForceConfig,
    inside_pixels: usize,
    outside_pixels: usize,
    /// Wall-clock time of the force evaluation, in milliseconds.
    elapsed_ms: f64,
    summary: ForceSummary,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config_from_args(args: &Args) -> Result<ForceConfig> {
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()));
    }

    let border = match args.border {
        BorderArg::Zero => BorderPolicy::Zero,
        BorderArg::Clamp => BorderPolicy::Clamp,
        BorderArg::Reflect101 => BorderPolicy::Reflect101,
    };
    Ok(match args.model {
        ModelArg::Piecewise => ForceConfig::PiecewiseConstant {
            k0: args.k0,
            k1: args.k1,
        },
        ModelArg::Likelihood => ForceConfig::GaussianLikelihood,
        ModelArg::Local => ForceConfig::LocalGaussian {
            k0: args.k0,
            k1: args.k1,
            sigma: args.sigma,
            border,
        },
    })
}

fn parse_rect(spec: &str) -> Result<[usize; 4]> {
    let parts = spec
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing rect '{spec}'"))?;
    match parts.as_slice() {
        &[x, y, w, h] => Ok([x, y, w, h]),
        _ => bail!("rect must have four comma-separated values, got '{spec}'"),
    }
}

fn build_mask(args: &Args, gray: &Image<u8>) -> Result<Mask> {
    let (w, h) = gray.dims();
    if let Some(t) = args.threshold {
        return Ok(gray.map(|&px| px >= t));
    }
    let [x, y, rw, rh] = match &args.rect {
        Some(spec) => parse_rect(spec)?,
        None => [w / 4, h / 4, w / 2, h / 2],
    };
    Ok(Mask::from_rect(w, h, x, y, rw, rh))
}

/// Maps `[-max|f|, max|f|]` to `[0, 255]` with zero at 128.
fn force_to_gray(force: &Image<f64>, summary: &ForceSummary) -> GrayImage {
    let scale = summary.min.abs().max(summary.max.abs());
    let mut out = GrayImage::new(force.width() as u32, force.height() as u32);
    for y in 0..force.height() {
        for (x, &f) in force.row(y).iter().enumerate() {
            let v = if scale > 0.0 && f.is_finite() {
                128.0 + 127.0 * (f / scale)
            } else {
                128.0
            };
            out.put_pixel(x as u32, y as u32, Luma([v.clamp(0.0, 255.0) as u8]));
        }
    }
    out
}

fn output_paths(input: &Path, out_dir: Option<&Path>) -> (PathBuf, PathBuf) {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let dir = out_dir
        .or_else(|| input.parent())
        .unwrap_or(Path::new("."));
    (
        dir.join(format!("{stem}_force.png")),
        dir.join(format!("{stem}_force.json")),
    )
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let decoded = ImageReader::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?
        .decode()
        .with_context(|| format!("decoding {}", args.input.display()))?
        .into_luma8();
    let (w, h) = (decoded.width() as usize, decoded.height() as usize);
    let gray = Image::from_vec(w, h, decoded.into_raw()).context("building gray Image")?;
    let mask = build_mask(&args, &gray)?;
    println!(
        "loaded {}: {w}x{h}, inside={} outside={}",
        args.input.display(),
        mask.count(Region::Inside),
        mask.count(Region::Outside)
    );

    let config = config_from_args(&args)?;
    let model = config
        .build(to_f64(&gray.as_view()))
        .context("building force model")?;
    println!("model: {} ({config:?})", model.name());

    let mut facade = ImageForce::new(model);
    let t0 = Instant::now();
    let force = facade.get_force(&mask).context("computing force map")?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let summary = ForceSummary::of(force);
    println!(
        "force: min={:.4} max={:.4} mean={:.4} negative={} positive={} ({elapsed_ms:.2} ms)",
        summary.min, summary.max, summary.mean, summary.negative, summary.positive
    );

    let (png_path, json_path) = output_paths(&args.input, args.out.as_deref());
    if let Some(dir) = png_path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    force_to_gray(force, &summary)
        .save(&png_path)
        .with_context(|| format!("writing {}", png_path.display()))?;

    let report = Report {
        input: args.input.display().to_string(),
        config,
        inside_pixels: mask.count(Region::Inside),
        outside_pixels: mask.count(Region::Outside),
        elapsed_ms,
        summary,
    };
    let out_file = std::fs::File::create(&json_path)
        .with_context(|| format!("creating {}", json_path.display()))?;
    serde_json::to_writer_pretty(out_file, &report)
        .with_context(|| format!("writing JSON to {}", json_path.display()))?;

    println!("results written to {} and {}", png_path.display(), json_path.display());
    Ok(())
}
