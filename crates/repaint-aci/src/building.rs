//! Building-level recoloring.
//!
//! A building prefab renders through several meshes, each with its own
//! material: the main mesh, its LOD, and every sub-mesh with its LOD.
//! Sub-buildings carry their own meshes and inherit the parent's mode.
//!
//! Processing is best-effort. Each mesh slot is attempted independently;
//! a slot whose textures cannot be read or re-uploaded is logged, recorded
//! in the [`ColorizeReport`] and skipped.
//!
//! # Texture access
//!
//! Reading pixels back from an engine texture is engine plumbing, so it is
//! hidden behind [`TextureSource`]. The file-backed implementation lives in
//! `repaint-io`; tests use in-memory sources.

use rayon::prelude::*;
use repaint_core::Texture;
use std::fmt;
use tracing::{debug, info, trace, warn};

use crate::{ColorizeError, ColorizeMode, MapKind, recolor_texture};

/// Access to readable pixel data behind opaque texture handles.
pub trait TextureSource {
    /// Opaque texture handle (file path, GPU id, ...).
    type Handle: fmt::Debug;

    /// Error raised by snapshot or upload.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produces a readable copy of the texture's pixels.
    fn snapshot(&self, texture: &Self::Handle) -> Result<Texture, Self::Error>;

    /// Replaces the texture behind `texture` with `replacement`.
    fn upload(&self, texture: &Self::Handle, replacement: Texture) -> Result<(), Self::Error>;
}

/// The two maps of a building material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material<H> {
    /// Ambient color intensity map (rewritten)
    pub aci: H,
    /// XYS map (read only)
    pub xys: H,
}

impl<H> Material<H> {
    /// Creates a material from its two map handles.
    pub fn new(aci: H, xys: H) -> Self {
        Self { aci, xys }
    }
}

/// Position of a mesh within its building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshKind {
    /// Main mesh
    Main,
    /// Main mesh level-of-detail
    Lod,
    /// Sub-mesh by index
    SubMesh(usize),
    /// Sub-mesh level-of-detail by index
    SubMeshLod(usize),
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("main"),
            Self::Lod => f.write_str("lod"),
            Self::SubMesh(i) => write!(f, "sub{}", i),
            Self::SubMeshLod(i) => write!(f, "sub{}_lod", i),
        }
    }
}

/// One mesh of a building and its material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSlot<H> {
    /// Where the mesh sits in the building
    pub kind: MeshKind,
    /// Maps to recolor
    pub material: Material<H>,
}

/// A building prefab: its meshes and nested sub-buildings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building<H> {
    /// Prefab name, the key into the colorizer configuration
    pub name: String,
    /// Mesh slots, in processing order
    pub meshes: Vec<MeshSlot<H>>,
    /// Attached sub-buildings
    pub sub_buildings: Vec<Building<H>>,
}

impl<H> Building<H> {
    /// Creates a building with no meshes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
            sub_buildings: Vec::new(),
        }
    }

    /// Adds a mesh slot.
    pub fn with_mesh(mut self, kind: MeshKind, material: Material<H>) -> Self {
        self.meshes.push(MeshSlot { kind, material });
        self
    }

    /// Adds a sub-building.
    pub fn with_sub_building(mut self, sub: Building<H>) -> Self {
        self.sub_buildings.push(sub);
        self
    }

    /// Mesh slots in this building and all sub-buildings.
    pub fn slot_count(&self) -> usize {
        self.meshes.len()
            + self
                .sub_buildings
                .iter()
                .map(Building::slot_count)
                .sum::<usize>()
    }
}

/// A mesh slot that could not be recolored.
#[derive(Debug)]
pub struct SlotFailure {
    /// Name of the (sub-)building owning the slot
    pub building: String,
    /// Which slot failed
    pub slot: MeshKind,
    /// Why
    pub error: ColorizeError,
}

/// Outcome of a colorize pass.
#[derive(Debug, Default)]
pub struct ColorizeReport {
    /// Buildings and sub-buildings visited
    pub buildings: usize,
    /// Slots recolored and uploaded
    pub processed: usize,
    /// Slots skipped after an error
    pub failures: Vec<SlotFailure>,
}

impl ColorizeReport {
    /// True if no slot failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failed slots.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: ColorizeReport) {
        self.buildings += other.buildings;
        self.processed += other.processed;
        self.failures.extend(other.failures);
    }
}

/// Recolors one material's ACI map and uploads the result.
///
/// # Errors
///
/// - [`ColorizeError::Snapshot`] if either map cannot be read
/// - [`ColorizeError::Recolor`] if the maps differ in size
/// - [`ColorizeError::Upload`] if the replacement cannot be stored
pub fn colorize_material<S: TextureSource>(
    source: &S,
    material: &Material<S::Handle>,
    invert: bool,
) -> Result<(), ColorizeError> {
    let aci = source
        .snapshot(&material.aci)
        .map_err(|e| ColorizeError::snapshot(MapKind::Aci, e))?;
    let xys = source
        .snapshot(&material.xys)
        .map_err(|e| ColorizeError::snapshot(MapKind::Xys, e))?;

    let recolored = recolor_texture(&aci, &xys, invert)?;

    source
        .upload(&material.aci, recolored)
        .map_err(ColorizeError::upload)
}

/// Applies `mode` to every mesh slot of `building` and its sub-buildings.
///
/// [`ColorizeMode::None`] visits nothing. Slot failures are logged at warn
/// level and collected; they never stop the remaining slots.
pub fn colorize_building<S: TextureSource>(
    source: &S,
    building: &Building<S::Handle>,
    mode: ColorizeMode,
) -> ColorizeReport {
    let mut report = ColorizeReport::default();

    let Some(invert) = mode.invert_flag() else {
        trace!(building = %building.name, "no colorize mode, skipping");
        return report;
    };

    colorize_tree(source, building, invert, &mut report);
    report
}

fn colorize_tree<S: TextureSource>(
    source: &S,
    building: &Building<S::Handle>,
    invert: bool,
    report: &mut ColorizeReport,
) {
    report.buildings += 1;
    debug!(
        building = %building.name,
        invert,
        slots = building.meshes.len(),
        "colorizing building"
    );

    for slot in &building.meshes {
        match colorize_material(source, &slot.material, invert) {
            Ok(()) => report.processed += 1,
            Err(error) => {
                warn!(
                    building = %building.name,
                    slot = %slot.kind,
                    aci = ?slot.material.aci,
                    %error,
                    "skipping mesh slot"
                );
                report.failures.push(SlotFailure {
                    building: building.name.clone(),
                    slot: slot.kind,
                    error,
                });
            }
        }
    }

    for sub in &building.sub_buildings {
        colorize_tree(source, sub, invert, report);
    }
}

/// Colorizes many buildings in parallel.
///
/// `mode_of` maps a prefab name to its mode, typically a colorizer
/// configuration lookup. Buildings share nothing, so each one runs on the
/// rayon pool independently.
pub fn colorize_buildings<S, F>(
    source: &S,
    buildings: &[Building<S::Handle>],
    mode_of: F,
) -> ColorizeReport
where
    S: TextureSource + Sync,
    S::Handle: Sync,
    F: Fn(&str) -> ColorizeMode + Sync,
{
    let report = buildings
        .par_iter()
        .map(|b| colorize_building(source, b, mode_of(&b.name)))
        .reduce(ColorizeReport::default, |mut acc, r| {
            acc.merge(r);
            acc
        });

    info!(
        buildings = report.buildings,
        processed = report.processed,
        failed = report.failed(),
        "colorize pass complete"
    );
    report
}
