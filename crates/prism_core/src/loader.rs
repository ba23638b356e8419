//! Loading scene descriptions from JSON.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene description from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::debug!("Loading scene description from {}", path.display());

    let source = fs::read_to_string(path)?;
    load_scene_from_str(&source)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(source: &str) -> LoadResult<SceneDescription> {
    let desc: SceneDescription = serde_json::from_str(source)?;
    validate(&desc)?;

    log::debug!(
        "Scene description: {}x{}, {} object(s), depth {}, {} spp",
        desc.width,
        desc.height,
        desc.objects.len(),
        desc.settings.max_depth,
        desc.settings.samples_per_pixel
    );
    Ok(desc)
}

/// Smallest width or height the camera can map. Pixel coordinates are
/// divided by `extent - 1`.
pub const MIN_IMAGE_EXTENT: u32 = 2;

/// Reject descriptions that cannot produce an image.
pub fn validate(desc: &SceneDescription) -> LoadResult<()> {
    if desc.width < MIN_IMAGE_EXTENT || desc.height < MIN_IMAGE_EXTENT {
        return Err(LoadError::Invalid(format!(
            "image must be at least {m}x{m}, got {}x{}",
            desc.width,
            desc.height,
            m = MIN_IMAGE_EXTENT
        )));
    }
    if desc.settings.samples_per_pixel == 0 {
        return Err(LoadError::Invalid(
            "samples_per_pixel must be at least 1".to_string(),
        ));
    }
    Ok(())
}
