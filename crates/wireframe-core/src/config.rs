//! Render configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CameraPose, CameraRig, Intrinsics, Result, WireframeError};

/// Camera and output image settings for a render.
///
/// Missing fields take their default values when deserialized, so a config
/// file only needs to list what differs from the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image width in pixels.
    pub image_width: u32,

    /// Output image height in pixels.
    pub image_height: u32,

    /// Camera placement and focal length.
    pub camera: CameraRig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 512,
            image_height: 512,
            camera: CameraRig::default(),
        }
    }
}

impl RenderConfig {
    /// Checks the values the pipeline assumes but never verifies.
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(WireframeError::InvalidDimensions {
                width: self.image_width,
                height: self.image_height,
            });
        }
        let focal = self.camera.focal_length;
        if !focal.is_finite() || focal <= 0.0 {
            return Err(WireframeError::InvalidFocalLength(focal));
        }
        Ok(())
    }

    /// Parses and validates a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Writes the config to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Returns the camera pose.
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Returns the intrinsics for the configured image size.
    pub fn intrinsics(&self) -> Intrinsics {
        self.camera.intrinsics(self.image_width, self.image_height)
    }
}
