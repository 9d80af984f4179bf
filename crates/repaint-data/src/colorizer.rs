//! Colorizer configuration.
//!
//! Records, per building prefab, whether its ACI maps are colorized,
//! inverted or left alone. The on-disk form is an XML document with two
//! name lists:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <PainterColorizer>
//!   <Colorized>
//!     <string>H1 2x2 Detached01</string>
//!   </Colorized>
//!   <Inverted/>
//! </PainterColorizer>
//! ```
//!
//! In memory it is a single `prefab -> mode` map, so a prefab can never sit
//! in both lists. Files written by other tools may list a name twice; on
//! load the colorized entry wins.

use quick_xml::de::from_str as xml_from_str;
use quick_xml::se::Serializer;
use repaint_aci::ColorizeMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{DataError, DataResult};

/// File name of the configuration in the local data directory.
pub const CONFIG_FILE_NAME: &str = "PainterColorizer.xml";

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// `PainterColorizer.xml` structure
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "PainterColorizer")]
struct ColorizerXml {
    #[serde(rename = "Colorized", default)]
    colorized: NameList,
    #[serde(rename = "Inverted", default)]
    inverted: NameList,
}

/// One list element holding `<string>` children
#[derive(Debug, Default, Serialize, Deserialize)]
struct NameList {
    #[serde(rename = "string", default)]
    names: Vec<String>,
}

/// Prefab name to colorize mode mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorizerConfig {
    modes: BTreeMap<String, ColorizeMode>,
}

impl ColorizerConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration path in the platform's local data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Mode for `prefab`, [`ColorizeMode::None`] if unlisted.
    pub fn mode(&self, prefab: &str) -> ColorizeMode {
        self.modes.get(prefab).copied().unwrap_or_default()
    }

    /// Sets the mode for `prefab` and returns the previous one.
    ///
    /// [`ColorizeMode::None`] removes the prefab from the configuration.
    pub fn set_mode(&mut self, prefab: impl Into<String>, mode: ColorizeMode) -> ColorizeMode {
        let prefab = prefab.into();
        let previous = match mode {
            ColorizeMode::None => self.modes.remove(&prefab),
            _ => self.modes.insert(prefab, mode),
        };
        previous.unwrap_or_default()
    }

    /// Prefabs with a given mode, in name order.
    pub fn prefabs(&self, mode: ColorizeMode) -> impl Iterator<Item = &str> {
        self.modes
            .iter()
            .filter(move |(_, m)| **m == mode)
            .map(|(name, _)| name.as_str())
    }

    /// All listed prefabs with their modes, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColorizeMode)> {
        self.modes.iter().map(|(name, mode)| (name.as_str(), *mode))
    }

    /// Number of listed prefabs.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// True if no prefab is listed.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Parses an XML document.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Xml`] if the document is malformed.
    pub fn from_xml_str(xml: &str) -> DataResult<Self> {
        let doc: ColorizerXml = xml_from_str(xml).map_err(|e| DataError::Xml(e.to_string()))?;

        let mut config = Self::new();
        // Inverted first so a name in both lists ends up colorized.
        for name in doc.inverted.names {
            config.set_mode(name, ColorizeMode::Inverted);
        }
        for name in doc.colorized.names {
            config.set_mode(name, ColorizeMode::Colorized);
        }
        Ok(config)
    }

    /// Serializes to an indented XML document.
    pub fn to_xml_string(&self) -> DataResult<String> {
        let doc = ColorizerXml {
            colorized: NameList {
                names: self.prefabs(ColorizeMode::Colorized).map(String::from).collect(),
            },
            inverted: NameList {
                names: self.prefabs(ColorizeMode::Inverted).map(String::from).collect(),
            },
        };

        let mut xml = String::from(XML_DECL);
        let mut ser = Serializer::new(&mut xml);
        ser.indent(' ', 2);
        doc.serialize(ser).map_err(|e| DataError::Xml(e.to_string()))?;
        xml.push('\n');
        Ok(xml)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// I/O and XML errors are returned as-is. Use [`load`](Self::load) for
    /// the forgiving variant.
    pub fn try_load(path: &Path) -> DataResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_xml_str(&content)
    }

    /// Reads a configuration file, falling back to an empty configuration
    /// if it is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                debug!(path = %path.display(), prefabs = config.len(), "loaded colorizer config");
                config
            }
            Err(DataError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no colorizer config, starting empty");
                Self::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "couldn't read colorizer config, starting empty");
                Self::new()
            }
        }
    }

    /// Writes the configuration, creating parent directories.
    pub fn save(&self, path: &Path) -> DataResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_xml_string()?)?;
        debug!(path = %path.display(), prefabs = self.len(), "saved colorizer config");
        Ok(())
    }
}
