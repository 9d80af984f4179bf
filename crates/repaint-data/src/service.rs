//! Per-building color override service.
//!
//! [`RepaintService`] owns the tint table and the colorizer configuration.
//! It is an ordinary value: whoever owns it (normally the UI / main thread)
//! mutates it through `&mut self`, and anything that only needs to read
//! colors borrows it.

use repaint_aci::ColorizeMode;
use repaint_core::{BuildingId, Rgba8};
use tracing::debug;

use crate::savegame::{self, ColorTable};
use crate::{ColorizerConfig, DataResult};

/// Owner of per-building colors and the colorizer configuration.
#[derive(Debug, Clone, Default)]
pub struct RepaintService {
    colors: ColorTable,
    clipboard: Option<Rgba8>,
    colorizer: ColorizerConfig,
}

impl RepaintService {
    /// Creates a service with no overrides and an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service around an existing colorizer configuration.
    pub fn with_colorizer(colorizer: ColorizerConfig) -> Self {
        Self {
            colorizer,
            ..Self::default()
        }
    }

    /// Override color for `id`.
    pub fn get(&self, id: BuildingId) -> Option<Rgba8> {
        self.colors.get(&id).copied()
    }

    /// Sets the override for `id`, returning the previous one.
    pub fn set(&mut self, id: BuildingId, color: Rgba8) -> Option<Rgba8> {
        debug!(building = id, %color, "set building color");
        self.colors.insert(id, color)
    }

    /// Removes the override for `id`, returning it.
    pub fn clear(&mut self, id: BuildingId) -> Option<Rgba8> {
        let removed = self.colors.remove(&id);
        if removed.is_some() {
            debug!(building = id, "cleared building color");
        }
        removed
    }

    /// Number of overridden buildings.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if no building is overridden.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Overrides in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (BuildingId, Rgba8)> + '_ {
        self.colors.iter().map(|(&id, &c)| (id, c))
    }

    /// Color the renderer should use for `id`.
    ///
    /// Overrides only apply to the normal view; while an info overlay is
    /// active the host's own coloring is kept and this returns `None`.
    pub fn building_color(&self, id: BuildingId, overlay_active: bool) -> Option<Rgba8> {
        if overlay_active {
            return None;
        }
        self.get(id)
    }

    /// Copies the color currently shown for `id` into the clipboard.
    ///
    /// `shown` is the host's color for the building, used when it has no
    /// override. Returns the copied color.
    pub fn copy(&mut self, id: BuildingId, shown: Rgba8) -> Rgba8 {
        let color = self.get(id).unwrap_or(shown);
        self.clipboard = Some(color);
        color
    }

    /// Applies the clipboard color to `id`. Does nothing if nothing was
    /// copied yet; returns the applied color.
    pub fn paste(&mut self, id: BuildingId) -> Option<Rgba8> {
        let color = self.clipboard?;
        self.set(id, color);
        Some(color)
    }

    /// Removes the override for `id`.
    pub fn erase(&mut self, id: BuildingId) -> Option<Rgba8> {
        self.clear(id)
    }

    /// Current clipboard color.
    pub fn clipboard(&self) -> Option<Rgba8> {
        self.clipboard
    }

    /// Encodes the overrides for the savegame.
    pub fn save_data(&self) -> DataResult<Vec<u8>> {
        savegame::encode(&self.colors)
    }

    /// Replaces the overrides with a savegame payload.
    ///
    /// A missing or empty payload clears the table. On error the current
    /// table is left untouched.
    pub fn load_data(&mut self, data: Option<&[u8]>) -> DataResult<()> {
        self.colors = savegame::decode(data)?;
        debug!(records = self.colors.len(), "loaded building colors");
        Ok(())
    }

    /// The colorizer configuration.
    pub fn colorizer(&self) -> &ColorizerConfig {
        &self.colorizer
    }

    /// Colorize mode of a prefab.
    pub fn colorize_mode(&self, prefab: &str) -> ColorizeMode {
        self.colorizer.mode(prefab)
    }

    /// Sets a prefab's colorize mode, returning the previous one.
    pub fn set_colorize_mode(&mut self, prefab: &str, mode: ColorizeMode) -> ColorizeMode {
        debug!(prefab, %mode, "set colorize mode");
        self.colorizer.set_mode(prefab, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataError;

    const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
    const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);

    #[test]
    fn test_set_get_clear() {
        let mut s = RepaintService::new();
        assert_eq!(s.set(10, RED), None);
        assert_eq!(s.set(10, BLUE), Some(RED));
        assert_eq!(s.get(10), Some(BLUE));
        assert_eq!(s.clear(10), Some(BLUE));
        assert_eq!(s.clear(10), None);
        assert!(s.is_empty());
    }

    #[test]
    fn test_overlay_hides_override() {
        let mut s = RepaintService::new();
        s.set(3, RED);
        assert_eq!(s.building_color(3, false), Some(RED));
        assert_eq!(s.building_color(3, true), None);
        assert_eq!(s.building_color(4, false), None);
    }

    #[test]
    fn test_copy_paste_erase() {
        let mut s = RepaintService::new();
        assert_eq!(s.paste(1), None);
        assert!(s.is_empty());

        // no override: copies what the host shows
        assert_eq!(s.copy(1, BLUE), BLUE);
        s.set(2, RED);
        assert_eq!(s.copy(2, BLUE), RED);

        assert_eq!(s.paste(5), Some(RED));
        assert_eq!(s.get(5), Some(RED));
        assert_eq!(s.erase(5), Some(RED));
        assert_eq!(s.get(5), None);
        assert_eq!(s.clipboard(), Some(RED));
    }

    #[test]
    fn test_save_load() {
        let mut s = RepaintService::new();
        s.set(65535, RED);
        s.set(0, BLUE);
        let blob = s.save_data().unwrap();

        let mut restored = RepaintService::new();
        restored.set(9, RED);
        restored.load_data(Some(&blob[..])).unwrap();
        let entries: Vec<_> = restored.iter().collect();
        assert_eq!(entries, vec![(0, BLUE), (65535, RED)]);

        restored.load_data(None).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_failed_load_keeps_table() {
        let mut s = RepaintService::new();
        s.set(1, RED);
        let err = s.load_data(Some(&[1u8, 0, 0, 0, 7][..])).unwrap_err();
        assert!(matches!(err, DataError::Truncated { .. }));
        assert_eq!(s.get(1), Some(RED));
    }

    #[test]
    fn test_colorize_modes() {
        let mut s = RepaintService::new();
        assert_eq!(s.colorize_mode("Tower"), ColorizeMode::None);
        s.set_colorize_mode("Tower", ColorizeMode::Colorized);
        assert_eq!(
            s.set_colorize_mode("Tower", ColorizeMode::Inverted),
            ColorizeMode::Colorized
        );
        assert_eq!(s.colorizer().len(), 1);
    }
}
