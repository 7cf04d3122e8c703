//! Comparison against stored reference results.
//!
//! Each pipeline stage can be checked on its own: camera-space points and
//! projected points are stored as JSON (absent points as `null`), rendered
//! images as PNG. A missing reference is written from the actual result, so
//! the first run of a new case records it and later runs compare against it.
//!
//! ```no_run
//! use wireframe::regression::ReferenceStore;
//! use wireframe::*;
//!
//! # fn main() -> wireframe::Result<()> {
//! let store = ReferenceStore::new("tests/references");
//! let model = Model::load("models/square.json")?;
//! let report = store.check_scenario("square_front", &model, &RenderConfig::default())?;
//! assert!(report.passed());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wireframe_core::{Model, RenderConfig};
use wireframe_render::{
    load_image, project_points, render_wireframe, save_image, to_camera_space, ProjectedPoint,
    RasterBuffer,
};

use crate::Result;

/// Relative tolerance for comparing floating-point coordinates.
pub const RELATIVE_TOLERANCE: f64 = 1e-5;

/// Absolute tolerance for comparing floating-point coordinates.
pub const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// How many compared elements matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub matched: usize,
    pub total: usize,
}

impl Comparison {
    /// Returns true if every element matched.
    pub fn passed(&self) -> bool {
        self.matched == self.total
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} matched", self.matched, self.total)
    }
}

/// Returns true if `actual` is within tolerance of `expected`:
/// `|expected - actual| <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * |actual|`.
pub fn is_close(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * actual.abs()
}

/// Compares camera-space points component by component.
///
/// Points missing from the shorter sequence count as mismatches.
pub fn compare_camera_space(expected: &[DVec3], actual: &[DVec3]) -> Comparison {
    let matched = expected
        .iter()
        .zip(actual)
        .map(|(e, a)| {
            e.to_array()
                .into_iter()
                .zip(a.to_array())
                .filter(|&(e, a)| is_close(e, a))
                .count()
        })
        .sum();
    Comparison {
        matched,
        total: 3 * expected.len().max(actual.len()),
    }
}

/// Compares projected points.
///
/// Two points match if both are absent or both are present at the same pixel.
pub fn compare_projections(expected: &[ProjectedPoint], actual: &[ProjectedPoint]) -> Comparison {
    let matched = expected.iter().zip(actual).filter(|(e, a)| e == a).count();
    Comparison {
        matched,
        total: expected.len().max(actual.len()),
    }
}

/// Result of comparing two images pixel by pixel.
#[derive(Debug, Clone)]
pub struct ImageDiff {
    /// Number of pixels that differ (including pixels outside the smaller image).
    pub mismatched: usize,
    /// Number of pixels compared.
    pub total: usize,
    /// Overlay of both images: green carries the expected image, blue the
    /// actual one, and red is lit only where both are.
    pub visualization: RasterBuffer,
}

impl ImageDiff {
    /// Returns true if the images are identical.
    pub fn identical(&self) -> bool {
        self.mismatched == 0
    }
}

/// Compares two images pixel by pixel and builds a diff overlay.
///
/// Images of different sizes are compared over the larger extent, with
/// pixels outside an image treated as missing.
pub fn compare_images(expected: &RasterBuffer, actual: &RasterBuffer) -> ImageDiff {
    let width = expected.width().max(actual.width());
    let height = expected.height().max(actual.height());
    let mut overlay = Vec::with_capacity((width as usize) * (height as usize) * 3);
    let mut mismatched = 0;

    for y in 0..height {
        for x in 0..width {
            let e = expected.pixel(x, y);
            let a = actual.pixel(x, y);
            if e != a {
                mismatched += 1;
            }
            let e = e.unwrap_or_default();
            let a = a.unwrap_or_default();
            overlay.extend_from_slice(&[e[0] & a[0], e[1], a[2]]);
        }
    }

    let visualization = RasterBuffer::from_raw(width, height, overlay)
        .unwrap_or_else(|_| RasterBuffer::new(width, height));
    ImageDiff {
        mismatched,
        total: (width as usize) * (height as usize),
        visualization,
    }
}

/// Outcome of checking a result against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The result matched the reference.
    Passed,
    /// No reference existed; one was written from the result.
    Generated,
    /// The result differed from the reference.
    Failed(Comparison),
}

impl CheckOutcome {
    /// Returns true unless the check failed.
    pub fn passed(&self) -> bool {
        !matches!(self, CheckOutcome::Failed(_))
    }
}

/// Outcomes of checking every stage of one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioReport {
    pub camera_space: CheckOutcome,
    pub projections: CheckOutcome,
    pub render: CheckOutcome,
}

impl ScenarioReport {
    /// Returns true if no stage failed.
    pub fn passed(&self) -> bool {
        self.camera_space.passed() && self.projections.passed() && self.render.passed()
    }
}

/// A directory of reference results.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    dir: PathBuf,
}

impl ReferenceStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file a reference named `name` is stored in.
    pub fn reference_path(&self, name: &str, extension: &str) -> PathBuf {
        self.dir.join(format!("{name}.{extension}"))
    }

    /// Checks camera-space points against `<name>.camera.json`.
    pub fn check_camera_space(&self, name: &str, actual: &[DVec3]) -> Result<CheckOutcome> {
        let path = self.reference_path(name, "camera.json");
        self.check_json(&path, actual, compare_camera_space)
    }

    /// Checks projected points against `<name>.projection.json`.
    pub fn check_projections(&self, name: &str, actual: &[ProjectedPoint]) -> Result<CheckOutcome> {
        let path = self.reference_path(name, "projection.json");
        self.check_json(&path, actual, compare_projections)
    }

    /// Checks a rendered image against `<name>.png`.
    ///
    /// On mismatch the diff overlay is written to `<name>.diff.png`.
    pub fn check_render(&self, name: &str, actual: &RasterBuffer) -> Result<CheckOutcome> {
        let path = self.reference_path(name, "png");
        if !path.exists() {
            std::fs::create_dir_all(&self.dir)?;
            save_image(&path, actual)?;
            log::info!("reference {} not found; generated it", path.display());
            return Ok(CheckOutcome::Generated);
        }

        let expected = load_image(&path)?;
        let diff = compare_images(&expected, actual);
        if diff.identical() {
            return Ok(CheckOutcome::Passed);
        }

        let diff_path = self.reference_path(name, "diff.png");
        save_image(&diff_path, &diff.visualization)?;
        log::warn!(
            "{name}: {} of {} pixels differ, overlay written to {}",
            diff.mismatched,
            diff.total,
            diff_path.display()
        );
        Ok(CheckOutcome::Failed(Comparison {
            matched: diff.total - diff.mismatched,
            total: diff.total,
        }))
    }

    /// Runs every pipeline stage for `model` and checks each against its reference.
    pub fn check_scenario(
        &self,
        name: &str,
        model: &Model,
        config: &RenderConfig,
    ) -> Result<ScenarioReport> {
        let pose = config.pose();
        let intrinsics = config.intrinsics();

        let camera_points = to_camera_space(model.vertices(), &pose);
        let projected = project_points(&camera_points, &intrinsics);
        let image = render_wireframe(
            model,
            &pose,
            &intrinsics,
            config.image_width,
            config.image_height,
        );

        let report = ScenarioReport {
            camera_space: self.check_camera_space(name, &camera_points)?,
            projections: self.check_projections(name, &projected)?,
            render: self.check_render(name, &image)?,
        };
        if report.passed() {
            log::info!("scenario '{name}' passed");
        } else {
            log::warn!("scenario '{name}' failed: {report:?}");
        }
        Ok(report)
    }

    fn check_json<T>(
        &self,
        path: &Path,
        actual: &[T],
        compare: fn(&[T], &[T]) -> Comparison,
    ) -> Result<CheckOutcome>
    where
        T: Serialize + DeserializeOwned,
    {
        if !path.exists() {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(path, serde_json::to_string_pretty(actual)?)?;
            log::info!("reference {} not found; generated it", path.display());
            return Ok(CheckOutcome::Generated);
        }

        let expected: Vec<T> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        let comparison = compare(&expected, actual);
        if comparison.passed() {
            Ok(CheckOutcome::Passed)
        } else {
            log::warn!("{}: {comparison}", path.display());
            Ok(CheckOutcome::Failed(comparison))
        }
    }
}
