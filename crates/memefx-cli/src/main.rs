//! memefx: apply meme effects to image files.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use memefx_core::{unique_output_path, Effect, EffectJob, EffectWorker, EffectsConfig, JobOutput};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "memefx")]
#[command(about = "Seam carving, swirls and deep-fried memes")]
#[command(version)]
struct Cli {
    /// TOML file overriding effect parameters
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output file, or a directory to place a generated file in
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Content-aware shrink by seam carving
    Liquid {
        /// Path to image file
        input: PathBuf,
        /// Scale factor in (0, 1]; defaults to the configured value
        #[arg(short, long)]
        scale: Option<f64>,
    },
    /// Twist the image around its center
    Swirl {
        /// Path to image file
        input: PathBuf,
    },
    /// Fisheye expansion of the center
    Bulge {
        /// Path to image file
        input: PathBuf,
    },
    /// Tunnel contraction of the center
    Pinch {
        /// Path to image file
        input: PathBuf,
    },
    /// Noise, oversaturation and heavy JPEG artifacts
    DeepFry {
        /// Path to image file
        input: PathBuf,
    },
    /// Extreme sharpening and contrast
    Crispy {
        /// Path to image file
        input: PathBuf,
    },
}

impl Commands {
    fn into_parts(self) -> (PathBuf, Effect) {
        match self {
            Commands::Liquid { input, scale } => (input, Effect::LiquidResize { scale }),
            Commands::Swirl { input } => (input, Effect::Swirl),
            Commands::Bulge { input } => (input, Effect::Bulge),
            Commands::Pinch { input } => (input, Effect::Pinch),
            Commands::DeepFry { input } => (input, Effect::DeepFry),
            Commands::Crispy { input } => (input, Effect::Crispy),
        }
    }
}

/// Pick the output file: an explicit file, a generated name inside an
/// explicit directory, or a generated name next to the input.
fn resolve_output(input: &Path, output: Option<PathBuf>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => unique_output_path(&path),
        Some(path) => path,
        None => {
            let dir = input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            unique_output_path(dir)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EffectsConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EffectsConfig::default(),
    };

    let (input, effect) = cli.command.into_parts();
    if !input.is_file() {
        bail!("input file {} does not exist", input.display());
    }
    let output = resolve_output(&input, cli.output);
    log::info!("{}: {} -> {}", effect, input.display(), output.display());

    let mut worker = EffectWorker::spawn(config).context("starting effect worker")?;
    let handle = worker.submit(EffectJob::file(&input, &output, effect))?;

    match handle
        .wait()
        .with_context(|| format!("{} failed on {}", effect, input.display()))?
    {
        JobOutput::File(path) => println!("{}", path.display()),
        JobOutput::Bytes(_) => bail!("worker returned bytes for a file job"),
    }

    Ok(())
}
