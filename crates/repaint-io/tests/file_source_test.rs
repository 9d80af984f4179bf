//! Discovery and colorizing of building directories on disk.

use approx::assert_abs_diff_eq;
use repaint_aci::{ColorizeMode, MeshKind, colorize_building};
use repaint_core::{Rgba, Texture};
use repaint_io::{FileTextureSource, IoError, discover_building, png};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_pair(dir: &Path, slot: &str, aci_green: f32, xys_blue: f32) {
    fs::create_dir_all(dir).unwrap();
    let aci = Texture::filled(4, 2, Rgba::new(0.2, aci_green, 0.6, 1.0));
    let xys = Texture::filled(4, 2, Rgba::new(0.0, 0.0, xys_blue, 1.0));
    png::write(dir.join(format!("{}_aci.png", slot)), &aci).unwrap();
    png::write(dir.join(format!("{}_xys.png", slot)), &xys).unwrap();
}

#[test]
fn discovers_slots_and_sub_buildings() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("Tower");
    write_pair(&root, "main", 1.0, 0.0);
    write_pair(&root, "sub1_lod", 1.0, 0.0);
    write_pair(&root, "lod", 1.0, 0.0);
    write_pair(&root.join("Annex"), "main", 1.0, 0.0);
    fs::write(root.join("roof_aci.png"), b"ignored").unwrap();
    fs::write(root.join("notes.txt"), b"ignored").unwrap();

    let building = discover_building(&root).unwrap();

    assert_eq!(building.name, "Tower");
    let kinds: Vec<MeshKind> = building.meshes.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MeshKind::Main, MeshKind::Lod, MeshKind::SubMeshLod(1)]);
    assert_eq!(building.meshes[2].material.xys, root.join("sub1_lod_xys.png"));
    assert_eq!(building.sub_buildings.len(), 1);
    assert_eq!(building.sub_buildings[0].name, "Annex");
    assert_eq!(building.slot_count(), 4);
}

#[test]
fn colorize_writes_to_output_tree() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("in").join("Tower");
    let out = tmp.path().join("out");
    write_pair(&root, "main", 0.5, 0.0);
    write_pair(&root.join("Annex"), "main", 0.5, 0.0);

    let building = discover_building(&root).unwrap();
    let source = FileTextureSource::new(&out).with_root(&root).unwrap();
    let report = colorize_building(&source, &building, ColorizeMode::Colorized);

    assert!(report.is_clean());
    assert_eq!(report.processed, 2);

    for path in [
        out.join("Tower").join("main_aci.png"),
        out.join("Tower").join("Annex").join("main_aci.png"),
    ] {
        let tex = png::read(&path).unwrap();
        assert_eq!(tex.dimensions(), (4, 2));
        for px in tex.pixels() {
            assert_abs_diff_eq!(px.g, 1.0, epsilon = 1.0 / 255.0);
            assert_abs_diff_eq!(px.r, 0.2, epsilon = 1.0 / 255.0);
        }
    }

    // inputs untouched
    let original = png::read(root.join("main_aci.png")).unwrap();
    assert_abs_diff_eq!(original.pixels()[0].g, 0.5, epsilon = 1.0 / 255.0);
    assert!(!out.join("Tower").join("main_xys.png").exists());
}

#[test]
fn missing_xys_fails_only_that_slot() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("Shed");
    let out = tmp.path().join("out");
    write_pair(&root, "main", 0.5, 1.0);
    write_pair(&root, "lod", 0.5, 1.0);
    fs::remove_file(root.join("lod_xys.png")).unwrap();

    let building = discover_building(&root).unwrap();
    let source = FileTextureSource::new(&out).with_root(&root).unwrap();
    let report = colorize_building(&source, &building, ColorizeMode::Inverted);

    assert_eq!(report.processed, 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.failures[0].slot, MeshKind::Lod);
    assert!(out.join("Shed").join("main_aci.png").is_file());
    assert!(!out.join("Shed").join("lod_aci.png").exists());
}

#[test]
fn missing_directory_is_error() {
    let tmp = tempdir().unwrap();
    assert!(discover_building(&tmp.path().join("nope")).is_err());
}

#[test]
fn zero_padded_slot_pairs_with_its_own_xys() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("Tower");
    let out = tmp.path().join("out");
    write_pair(&root, "sub01", 0.5, 0.0);

    let building = discover_building(&root).unwrap();
    assert_eq!(building.meshes.len(), 1);
    assert_eq!(building.meshes[0].kind, MeshKind::SubMesh(1));
    assert_eq!(building.meshes[0].material.xys, root.join("sub01_xys.png"));

    let source = FileTextureSource::new(&out).with_root(&root).unwrap();
    let report = colorize_building(&source, &building, ColorizeMode::Colorized);
    assert!(report.is_clean());
    assert!(out.join("Tower").join("sub01_aci.png").is_file());
}

#[test]
fn duplicate_slot_spellings_keep_canonical() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("Tower");
    write_pair(&root, "sub01", 0.5, 0.0);
    write_pair(&root, "sub1", 0.5, 0.0);
    write_pair(&root, "sub001_lod", 0.5, 0.0);
    write_pair(&root, "sub01_lod", 0.5, 0.0);

    let building = discover_building(&root).unwrap();

    let slots: Vec<_> = building
        .meshes
        .iter()
        .map(|m| (m.kind, m.material.aci.clone()))
        .collect();
    assert_eq!(
        slots,
        vec![
            (MeshKind::SubMesh(1), root.join("sub1_aci.png")),
            (MeshKind::SubMeshLod(1), root.join("sub001_lod_aci.png")),
        ]
    );
}

#[test]
fn roots_with_same_name_are_rejected() {
    let tmp = tempdir().unwrap();
    let a = tmp.path().join("a").join("Tower");
    let b = tmp.path().join("b").join("Tower");
    write_pair(&a, "main", 0.5, 0.0);
    write_pair(&b, "main", 0.5, 0.0);

    let err = FileTextureSource::new(tmp.path().join("out"))
        .with_root(&a)
        .unwrap()
        .with_root(&b)
        .unwrap_err();

    assert!(matches!(err, IoError::OutputCollision { .. }));
    assert!(err.to_string().contains("Tower"));
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_followed() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("Tower");
    write_pair(&root, "main", 0.5, 0.0);
    std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

    let building = discover_building(&root).unwrap();

    assert!(building.sub_buildings.is_empty());
    assert_eq!(building.slot_count(), 1);
}
