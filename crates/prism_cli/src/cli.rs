use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_core::{SceneDescription, ShadingMode};

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Render a scene of spheres to a PNG")]
pub struct Args {
    /// Scene description (JSON); the built-in demo scene is used when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum bounces per light path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Samples per pixel
    #[arg(long, short = 'n')]
    pub samples: Option<u32>,

    /// Seed for reproducible renders
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shade by surface normal instead of tracing light
    #[arg(long)]
    pub normals: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of a description.
    pub fn apply(&self, mut desc: SceneDescription) -> SceneDescription {
        if let Some(width) = self.width {
            desc.width = width;
        }
        if let Some(height) = self.height {
            desc.height = height;
        }
        if let Some(max_depth) = self.max_depth {
            desc.settings.max_depth = max_depth;
        }
        if let Some(samples) = self.samples {
            desc.settings.samples_per_pixel = samples;
        }
        if self.seed.is_some() {
            desc.settings.seed = self.seed;
        }
        if self.normals {
            desc.settings.shading = ShadingMode::Normals;
        }
        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["prism"]).unwrap();
        assert_eq!(args.scene, None);
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert_eq!(args.log_level, LogLevel::Info);

        let desc = args.apply(SceneDescription::demo());
        assert_eq!(desc, SceneDescription::demo());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "prism",
            "--width",
            "64",
            "--height",
            "48",
            "--max-depth",
            "5",
            "-n",
            "1",
            "--seed",
            "9",
            "--normals",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let desc = args.apply(SceneDescription::demo());
        assert_eq!((desc.width, desc.height), (64, 48));
        assert_eq!(desc.settings.max_depth, 5);
        assert_eq!(desc.settings.samples_per_pixel, 1);
        assert_eq!(desc.settings.seed, Some(9));
        assert_eq!(desc.settings.shading, ShadingMode::Normals);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_level() {
        assert!(Args::try_parse_from(["prism", "--log-level", "loud"]).is_err());
    }
}
