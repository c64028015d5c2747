//! Effect dispatch: decode, run one effect, encode.

use crate::config::{ConfigError, EffectsConfig};
use crate::decode::{decode_image, resize_to_fit, DecodeError, ResizeError};
use crate::distort::{bulge, pinch, swirl};
use crate::encode::{encode_jpeg, EncodeError};
use crate::enhance::{crispy, deep_fry};
use crate::raster::Raster;
use crate::seam::{liquid_resize, CarveError};
use rand::Rng;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Everything that can go wrong while producing an effect.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Carve(#[from] CarveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resize(#[from] ResizeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown effect: {0}")]
    UnknownEffect(String),

    #[error("Output path {0} is the input file")]
    OutputIsInput(PathBuf),
}

/// The effects the engine can apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Seam-carving shrink; `None` uses the configured default scale.
    LiquidResize { scale: Option<f64> },
    Swirl,
    Bulge,
    Pinch,
    DeepFry,
    Crispy,
}

impl Effect {
    /// Short name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Effect::LiquidResize { .. } => "liquid",
            Effect::Swirl => "swirl",
            Effect::Bulge => "bulge",
            Effect::Pinch => "pinch",
            Effect::DeepFry => "deep-fry",
            Effect::Crispy => "crispy",
        }
    }

    /// JPEG quality the result is encoded at.
    pub fn quality(&self, config: &EffectsConfig) -> u8 {
        match self {
            Effect::LiquidResize { .. } => config.liquid.quality,
            Effect::Swirl => config.swirl.quality,
            Effect::Bulge | Effect::Pinch => config.lens.quality,
            Effect::DeepFry => config.deep_fry.quality,
            Effect::Crispy => config.crispy.quality,
        }
    }

    /// Longest side the input is bounded to before the effect runs.
    pub fn working_size(&self, config: &EffectsConfig) -> u32 {
        match self {
            Effect::LiquidResize { .. } => config.liquid.max_size,
            Effect::Swirl => config.swirl.max_size,
            Effect::Bulge | Effect::Pinch => config.lens.max_size,
            Effect::DeepFry => config.deep_fry.max_size,
            Effect::Crispy => config.crispy.max_size,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::LiquidResize { scale: Some(scale) } => write!(f, "liquid({})", scale),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Effect {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "liquid" | "liquid-resize" => Ok(Effect::LiquidResize { scale: None }),
            "swirl" => Ok(Effect::Swirl),
            "bulge" => Ok(Effect::Bulge),
            "pinch" => Ok(Effect::Pinch),
            "deepfry" | "deep-fry" => Ok(Effect::DeepFry),
            "crispy" => Ok(Effect::Crispy),
            other => Err(EffectError::UnknownEffect(other.to_string())),
        }
    }
}

/// Apply `effect` to a decoded raster, drawing any randomness from the thread RNG.
pub fn apply_effect(
    raster: Raster,
    effect: Effect,
    config: &EffectsConfig,
) -> Result<Raster, EffectError> {
    apply_effect_with_rng(raster, effect, config, &mut rand::rng())
}

/// Apply `effect` to a decoded raster with an explicit random source.
///
/// The raster is bounded to the effect's working size first. Only
/// deep-fry consumes randomness, so a seeded `rng` makes every effect
/// reproducible.
pub fn apply_effect_with_rng<R: Rng>(
    raster: Raster,
    effect: Effect,
    config: &EffectsConfig,
    rng: &mut R,
) -> Result<Raster, EffectError> {
    config.validate()?;
    log::info!(
        "Applying {} to {}x{} image",
        effect,
        raster.width,
        raster.height
    );

    let output = match effect {
        Effect::LiquidResize { scale } => {
            let scale = scale.unwrap_or(config.liquid.default_scale);
            liquid_resize(raster, scale, &config.liquid)?
        }
        Effect::Swirl => swirl(&bounded(raster, effect, config)?, &config.swirl),
        Effect::Bulge => bulge(&bounded(raster, effect, config)?, &config.lens),
        Effect::Pinch => pinch(&bounded(raster, effect, config)?, &config.lens),
        Effect::DeepFry => {
            let mut working = bounded(raster, effect, config)?;
            deep_fry(&mut working, &config.deep_fry, rng);
            working
        }
        Effect::Crispy => {
            let mut working = bounded(raster, effect, config)?;
            crispy(&mut working, &config.crispy);
            working
        }
    };

    log::debug!("{} produced {}x{}", effect, output.width, output.height);
    Ok(output)
}

fn bounded(raster: Raster, effect: Effect, config: &EffectsConfig) -> Result<Raster, ResizeError> {
    resize_to_fit(raster, effect.working_size(config))
}

/// Decode `bytes`, apply `effect`, and return the JPEG-encoded result.
pub fn process_bytes(
    bytes: &[u8],
    effect: Effect,
    config: &EffectsConfig,
) -> Result<Vec<u8>, EffectError> {
    process_bytes_with_rng(bytes, effect, config, &mut rand::rng())
}

/// [`process_bytes`] with an explicit random source.
pub fn process_bytes_with_rng<R: Rng>(
    bytes: &[u8],
    effect: Effect,
    config: &EffectsConfig,
    rng: &mut R,
) -> Result<Vec<u8>, EffectError> {
    let raster = decode_image(bytes)?;
    let output = apply_effect_with_rng(raster, effect, config, rng)?;
    Ok(encode_jpeg(&output, effect.quality(config))?)
}

/// Read `input`, apply `effect`, and write the JPEG to `output`.
///
/// The input file is only read. Returns the path written.
pub fn process_file(
    input: &Path,
    output: &Path,
    effect: Effect,
    config: &EffectsConfig,
) -> Result<PathBuf, EffectError> {
    if output == input || is_same_file(input, output) {
        return Err(EffectError::OutputIsInput(output.to_path_buf()));
    }

    let bytes = std::fs::read(input)?;
    let encoded = process_bytes(&bytes, effect, config)?;
    std::fs::write(output, encoded)?;

    log::info!("Wrote {} result to {}", effect, output.display());
    Ok(output.to_path_buf())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// A fresh `<uuid>.jpg` path inside `dir`.
pub fn unique_output_path(dir: &Path) -> PathBuf {
    dir.join(format!("{}.jpg", uuid::Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn png_bytes(raster: &Raster) -> Vec<u8> {
        let img = RgbImage::from_raw(raster.width, raster.height, raster.pixels.clone()).unwrap();
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    fn pattern(width: u32, height: u32) -> Raster {
        let mut img = Raster::filled(width, height, [0, 0, 0]);
        for row in 0..height as usize {
            for col in 0..width as usize {
                img.set_pixel(
                    row,
                    col,
                    [(col * 5) as u8, (row * 7) as u8, ((row + col) * 3) as u8],
                );
            }
        }
        img
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "liquid".parse::<Effect>().unwrap(),
            Effect::LiquidResize { scale: None }
        );
        assert_eq!("swirl".parse::<Effect>().unwrap(), Effect::Swirl);
        assert_eq!("Bulge".parse::<Effect>().unwrap(), Effect::Bulge);
        assert_eq!("pinch".parse::<Effect>().unwrap(), Effect::Pinch);
        assert_eq!("deepfry".parse::<Effect>().unwrap(), Effect::DeepFry);
        assert_eq!("deep-fry".parse::<Effect>().unwrap(), Effect::DeepFry);
        assert_eq!("crispy".parse::<Effect>().unwrap(), Effect::Crispy);
        assert!(matches!(
            "blur".parse::<Effect>(),
            Err(EffectError::UnknownEffect(_))
        ));
    }

    #[test]
    fn test_name_round_trips() {
        for effect in [
            Effect::LiquidResize { scale: None },
            Effect::Swirl,
            Effect::Bulge,
            Effect::Pinch,
            Effect::DeepFry,
            Effect::Crispy,
        ] {
            assert_eq!(effect.name().parse::<Effect>().unwrap(), effect);
        }
    }

    #[test]
    fn test_quality_per_effect() {
        let config = EffectsConfig::default();
        assert_eq!(Effect::DeepFry.quality(&config), 8);
        assert_eq!(Effect::Crispy.quality(&config), 90);
        assert_eq!(Effect::LiquidResize { scale: None }.quality(&config), 90);
    }

    #[test]
    fn test_deep_fry_gray_end_to_end() {
        let _ = env_logger::builder().is_test(true).try_init();
        let gray = Raster::filled(100, 100, [128, 128, 128]);
        let config = EffectsConfig::default();

        let jpeg = process_bytes(&png_bytes(&gray), Effect::DeepFry, &config).unwrap();
        let decoded = decode_image(&jpeg).unwrap();

        assert_eq!((decoded.width, decoded.height), (100, 100));
        assert_ne!(decoded.pixels, gray.pixels);
    }

    #[test]
    fn test_seeded_process_is_reproducible() {
        let bytes = png_bytes(&pattern(40, 30));
        let config = EffectsConfig::default();

        let a = process_bytes_with_rng(
            &bytes,
            Effect::DeepFry,
            &config,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        let b = process_bytes_with_rng(
            &bytes,
            Effect::DeepFry,
            &config,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distortions_keep_dimensions() {
        let config = EffectsConfig::default();
        for effect in [Effect::Swirl, Effect::Bulge, Effect::Pinch, Effect::Crispy] {
            let out = apply_effect(pattern(32, 24), effect, &config).unwrap();
            assert_eq!((out.width, out.height), (32, 24), "{}", effect);
        }
    }

    #[test]
    fn test_working_size_is_applied() {
        let mut config = EffectsConfig::default();
        config.swirl.max_size = 16;

        let out = apply_effect(pattern(64, 32), Effect::Swirl, &config).unwrap();
        assert_eq!((out.width, out.height), (16, 8));
    }

    #[test]
    fn test_liquid_uses_default_scale() {
        let config = EffectsConfig::default();
        let out = apply_effect(
            pattern(40, 20),
            Effect::LiquidResize { scale: None },
            &config,
        )
        .unwrap();
        assert_eq!((out.width, out.height), (20, 10));

        let out = apply_effect(
            pattern(40, 20),
            Effect::LiquidResize { scale: Some(0.75) },
            &config,
        )
        .unwrap();
        assert_eq!((out.width, out.height), (30, 15));
    }

    #[test]
    fn test_bad_scale_is_carve_error() {
        let result = apply_effect(
            pattern(8, 8),
            Effect::LiquidResize { scale: Some(2.0) },
            &EffectsConfig::default(),
        );
        assert!(matches!(
            result,
            Err(EffectError::Carve(CarveError::InvalidScale(_)))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = EffectsConfig::default();
        config.crispy.quality = 0;

        let result = apply_effect(pattern(8, 8), Effect::Crispy, &config);
        assert!(matches!(result, Err(EffectError::Config(_))));
    }

    #[test]
    fn test_huge_noise_config_is_rejected_not_panicking() {
        let mut config = EffectsConfig::default();
        config.deep_fry.noise_min = 32700;
        config.deep_fry.noise_max = i16::MAX;

        let result = apply_effect_with_rng(
            Raster::filled(4, 4, [200, 200, 200]),
            Effect::DeepFry,
            &config,
            &mut StdRng::seed_from_u64(3),
        );
        assert!(matches!(result, Err(EffectError::Config(_))));
    }

    #[test]
    fn test_corrupt_bytes_are_decode_error() {
        let result = process_bytes(
            b"definitely not an image",
            Effect::Swirl,
            &EffectsConfig::default(),
        );
        assert!(matches!(result, Err(EffectError::Decode(_))));
    }

    #[test]
    fn test_process_file_leaves_input_alone() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let bytes = png_bytes(&pattern(20, 20));
        std::fs::write(&input, &bytes).unwrap();

        let output = unique_output_path(dir.path());
        let written =
            process_file(&input, &output, Effect::Pinch, &EffectsConfig::default()).unwrap();

        assert_eq!(written, output);
        assert_eq!(std::fs::read(&input).unwrap(), bytes);
        let result = decode_image(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!((result.width, result.height), (20, 20));
    }

    #[test]
    fn test_process_file_refuses_to_overwrite_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        std::fs::write(&input, png_bytes(&pattern(4, 4))).unwrap();

        let result = process_file(&input, &input, Effect::Swirl, &EffectsConfig::default());
        assert!(matches!(result, Err(EffectError::OutputIsInput(_))));
    }

    #[test]
    fn test_process_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = process_file(
            &dir.path().join("missing.png"),
            &dir.path().join("out.jpg"),
            Effect::Swirl,
            &EffectsConfig::default(),
        );
        assert!(matches!(result, Err(EffectError::Io(_))));
    }

    #[test]
    fn test_unique_output_paths() {
        let dir = Path::new("/tmp/out");
        let a = unique_output_path(dir);
        let b = unique_output_path(dir);

        assert_ne!(a, b);
        assert_eq!(a.parent(), Some(dir));
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some("jpg"));
    }
}
