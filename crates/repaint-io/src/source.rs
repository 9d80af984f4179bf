//! File-backed texture source.
//!
//! Handles are PNG file paths. [`FileTextureSource::snapshot`] reads the file,
//! [`FileTextureSource::upload`] writes the replacement under the output
//! directory, mirroring the path below the building directory it came from.
//! Inputs are never overwritten unless the output directory is chosen to
//! coincide with them.

use repaint_aci::{Building, Material, MeshKind, TextureSource};
use repaint_core::Texture;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::{IoError, IoResult, png};

const ACI_SUFFIX: &str = "_aci.png";
const XYS_SUFFIX: &str = "_xys.png";

/// Reads textures from PNG files and writes replacements to an output tree.
#[derive(Debug, Clone)]
pub struct FileTextureSource {
    output_dir: PathBuf,
    roots: Vec<PathBuf>,
}

impl FileTextureSource {
    /// Creates a source writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            roots: Vec::new(),
        }
    }

    /// Registers a building directory.
    ///
    /// Textures below `root` are written to `<output_dir>/<root name>/...`
    /// keeping their relative path, so sub-buildings do not collide.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputCollision`] if an already registered root
    /// maps to the same output directory (e.g. `a/Tower` and `b/Tower`).
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> IoResult<Self> {
        let root = root.into();
        let target = self.root_target(&root);
        if let Some(first) = self.roots.iter().find(|r| self.root_target(r) == target) {
            return Err(IoError::OutputCollision {
                first: first.clone(),
                second: root,
                target,
            });
        }
        self.roots.push(root);
        Ok(self)
    }

    /// Output directory mirroring `root`.
    fn root_target(&self, root: &Path) -> PathBuf {
        match root.file_name() {
            Some(name) => self.output_dir.join(name),
            None => self.output_dir.clone(),
        }
    }

    /// Where the replacement for `texture` is written.
    pub fn target_path(&self, texture: &Path) -> PathBuf {
        for root in &self.roots {
            if let Ok(rel) = texture.strip_prefix(root) {
                return self.root_target(root).join(rel);
            }
        }
        match texture.file_name() {
            Some(name) => self.output_dir.join(name),
            None => self.output_dir.join(texture),
        }
    }
}

impl TextureSource for FileTextureSource {
    type Handle = PathBuf;
    type Error = IoError;

    fn snapshot(&self, texture: &PathBuf) -> IoResult<Texture> {
        trace!(path = %texture.display(), "reading texture");
        png::read(texture)
    }

    fn upload(&self, texture: &PathBuf, replacement: Texture) -> IoResult<()> {
        let target = self.target_path(texture);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        png::write(&target, &replacement)?;
        debug!(
            source = %texture.display(),
            target = %target.display(),
            "wrote texture"
        );
        Ok(())
    }
}

/// Parses a slot name: `main`, `lod`, `sub<N>` or `sub<N>_lod`.
///
/// Indices with leading zeros (`sub01`) parse to the same slot as their
/// canonical spelling (`sub1`).
pub fn parse_slot(name: &str) -> Option<MeshKind> {
    match name {
        "main" => return Some(MeshKind::Main),
        "lod" => return Some(MeshKind::Lod),
        _ => {}
    }
    let rest = name.strip_prefix("sub")?;
    let (index, lod) = match rest.strip_suffix("_lod") {
        Some(index) => (index, true),
        None => (rest, false),
    };
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index.parse().ok()?;
    Some(if lod {
        MeshKind::SubMeshLod(index)
    } else {
        MeshKind::SubMesh(index)
    })
}

/// Builds a [`Building`] from a directory of texture files.
///
/// Every `<slot>_aci.png` becomes a mesh slot whose XYS map is the sibling
/// `<slot>_xys.png`. A missing XYS file is not an error here; it surfaces as
/// a snapshot failure for that slot when colorizing. Files with unknown slot
/// names are skipped. When two files name the same slot (`sub1` and
/// `sub01`) the canonical spelling is kept and the other skipped.
/// Subdirectories become sub-buildings; symlinked directories are not
/// followed.
///
/// The building is named after the directory.
pub fn discover_building(dir: &Path) -> IoResult<Building<PathBuf>> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            IoError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no directory name", dir.display()),
            ))
        })?;

    let mut slots: Vec<(MeshKind, String, PathBuf)> = Vec::new();
    let mut subdirs: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            subdirs.push(path);
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(slot) = file_name.strip_suffix(ACI_SUFFIX) else {
            continue;
        };
        match parse_slot(slot) {
            Some(kind) => slots.push((kind, slot.to_string(), path)),
            None => warn!(path = %path.display(), "unknown mesh slot, skipping"),
        }
    }

    // canonical spelling first within a slot, then by name
    slots.sort_by(|(ka, sa, _), (kb, sb, _)| {
        ka.cmp(kb)
            .then_with(|| (ka.to_string() != *sa).cmp(&(kb.to_string() != *sb)))
            .then_with(|| sa.cmp(sb))
    });
    subdirs.sort();

    let mut building = Building::new(name);
    let mut last: Option<MeshKind> = None;
    for (kind, slot, aci) in slots {
        if last == Some(kind) {
            warn!(path = %aci.display(), slot = %kind, "duplicate mesh slot, skipping");
            continue;
        }
        last = Some(kind);

        let xys = dir.join(format!("{}{}", slot, XYS_SUFFIX));
        if !xys.is_file() {
            warn!(path = %xys.display(), "XYS map missing");
        }
        building = building.with_mesh(kind, Material::new(aci, xys));
    }
    for sub in subdirs {
        building = building.with_sub_building(discover_building(&sub)?);
    }

    debug!(
        building = %building.name,
        slots = building.slot_count(),
        "discovered building"
    );
    Ok(building)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot() {
        assert_eq!(parse_slot("main"), Some(MeshKind::Main));
        assert_eq!(parse_slot("lod"), Some(MeshKind::Lod));
        assert_eq!(parse_slot("sub0"), Some(MeshKind::SubMesh(0)));
        assert_eq!(parse_slot("sub12_lod"), Some(MeshKind::SubMeshLod(12)));
        assert_eq!(parse_slot("sub"), None);
        assert_eq!(parse_slot("sub_lod"), None);
        assert_eq!(parse_slot("sub+1"), None);
        assert_eq!(parse_slot("roof"), None);
    }

    #[test]
    fn test_slot_names_match_display() {
        for kind in [
            MeshKind::Main,
            MeshKind::Lod,
            MeshKind::SubMesh(3),
            MeshKind::SubMeshLod(3),
        ] {
            assert_eq!(parse_slot(&kind.to_string()), Some(kind));
        }
    }

    #[test]
    fn test_parse_slot_leading_zeros() {
        assert_eq!(parse_slot("sub01"), Some(MeshKind::SubMesh(1)));
        assert_eq!(parse_slot("sub007_lod"), Some(MeshKind::SubMeshLod(7)));
    }

    #[test]
    fn test_target_path() {
        let src = FileTextureSource::new("/out").with_root("/in/Tower").unwrap();

        assert_eq!(
            src.target_path(Path::new("/in/Tower/main_aci.png")),
            PathBuf::from("/out/Tower/main_aci.png")
        );
        assert_eq!(
            src.target_path(Path::new("/in/Tower/Annex/lod_aci.png")),
            PathBuf::from("/out/Tower/Annex/lod_aci.png")
        );
        assert_eq!(
            src.target_path(Path::new("/elsewhere/sub0_aci.png")),
            PathBuf::from("/out/sub0_aci.png")
        );
    }

    #[test]
    fn test_same_root_name_is_rejected() {
        let src = FileTextureSource::new("/out")
            .with_root("/a/Tower")
            .unwrap()
            .with_root("/a/Shed")
            .unwrap();

        let err = src.with_root("/b/Tower").unwrap_err();
        match err {
            IoError::OutputCollision { first, second, target } => {
                assert_eq!(first, PathBuf::from("/a/Tower"));
                assert_eq!(second, PathBuf::from("/b/Tower"));
                assert_eq!(target, PathBuf::from("/out/Tower"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
