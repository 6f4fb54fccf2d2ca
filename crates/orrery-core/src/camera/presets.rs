//! Static table of named camera viewpoints.

use ahash::AHashMap;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::view::ViewPoint;
use crate::error::CatalogError;

/// Id of the wide view that never locks the camera.
pub const OVERVIEW: &str = "overview";

const BUILTIN_PRESETS: &str = include_str!("../../assets/presets.ron");

/// A named point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPreset {
    pub id: String,
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl CameraPreset {
    pub fn view(&self) -> ViewPoint {
        ViewPoint {
            eye: self.eye,
            look_at: self.look_at,
        }
    }

    pub fn is_overview(&self) -> bool {
        self.id == OVERVIEW
    }
}

#[derive(Deserialize)]
struct PresetFile {
    default_view: ViewPoint,
    presets: Vec<CameraPreset>,
    #[serde(default)]
    tour: Vec<String>,
}

/// Immutable lookup of presets by id, in declaration order.
#[derive(Debug, Clone)]
pub struct PresetTable {
    presets: Vec<CameraPreset>,
    index: AHashMap<String, usize>,
    default_view: ViewPoint,
    tour: Vec<String>,
}

impl PresetTable {
    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_ron(BUILTIN_PRESETS)
    }

    pub fn from_ron(source: &str) -> Result<Self, CatalogError> {
        let file: PresetFile =
            ron::from_str(source).map_err(|e| CatalogError::parse("camera presets", e))?;
        Self::new(file.presets, file.default_view, file.tour)
    }

    /// Build a table. Ids must be unique and every tour stop must exist.
    pub fn new(
        presets: Vec<CameraPreset>,
        default_view: ViewPoint,
        tour: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(presets.len());
        for (i, preset) in presets.iter().enumerate() {
            if index.insert(preset.id.clone(), i).is_some() {
                return Err(CatalogError::Duplicate {
                    name: "camera presets",
                    key: preset.id.clone(),
                });
            }
        }
        if let Some(missing) = tour.iter().find(|id| !index.contains_key(id.as_str())) {
            return Err(CatalogError::UnknownTourStop(missing.clone()));
        }

        log::debug!(
            "Loaded {} camera presets ({} tour stops)",
            presets.len(),
            tour.len()
        );

        Ok(Self {
            presets,
            index,
            default_view,
            tour,
        })
    }

    pub fn get(&self, id: &str) -> Option<&CameraPreset> {
        self.index.get(id).map(|&i| &self.presets[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CameraPreset> {
        self.presets.iter()
    }

    /// Presets a user can navigate to directly (everything but the overview).
    pub fn navigable(&self) -> impl Iterator<Item = &CameraPreset> {
        self.presets.iter().filter(|p| !p.is_overview())
    }

    /// Where `reset_to_default` takes the camera.
    pub fn default_view(&self) -> ViewPoint {
        self.default_view
    }

    /// Guided tour playlist.
    pub fn tour(&self) -> &[String] {
        &self.tour
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
