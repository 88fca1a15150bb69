//! Board definitions
//!
//! A board is a buildable target belonging to an installed platform release.
//! Board ids are only unique within their platform.

use std::collections::HashMap;

use super::package::PlatformRef;

/// A USB vendor/product id pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsbId {
    /// Vendor id, hex
    pub vid: String,
    /// Product id, hex
    pub pid: String,
}

impl UsbId {
    /// Create a USB id pair
    pub fn new(vid: &str, pid: &str) -> Self {
        Self {
            vid: vid.to_string(),
            pid: pid.to_string(),
        }
    }

    /// Check whether this pair matches `vid`/`pid`
    ///
    /// Comparison is case-insensitive and ignores a leading `0x`.
    pub fn matches(&self, vid: &str, pid: &str) -> bool {
        hex_eq(&self.vid, vid) && hex_eq(&self.pid, pid)
    }
}

fn strip_hex_prefix(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

fn hex_eq(a: &str, b: &str) -> bool {
    strip_hex_prefix(a).eq_ignore_ascii_case(strip_hex_prefix(b))
}

/// A board definition
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Board identifier, unique within its platform
    pub id: String,
    /// Display name
    pub name: String,
    /// Board properties (`build.mcu`, `upload.tool`, ...)
    pub properties: HashMap<String, String>,
    /// USB ids the board enumerates with
    pub usb_ids: Vec<UsbId>,
    platform: PlatformRef,
}

impl Board {
    /// Create a board with no properties
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            properties: HashMap::new(),
            usb_ids: Vec::new(),
            platform: PlatformRef::default(),
        }
    }

    /// Build a board from its property set
    ///
    /// `name` becomes the display name and every `vid.N`/`pid.N` pair becomes
    /// a USB id. A `vid.N` without matching `pid.N` is ignored.
    pub fn from_properties(id: &str, properties: HashMap<String, String>) -> Self {
        let name = properties.get("name").cloned().unwrap_or_else(|| id.to_string());

        let mut indexed: Vec<(&str, &String)> = properties
            .iter()
            .filter_map(|(key, vid)| key.strip_prefix("vid.").map(|idx| (idx, vid)))
            .collect();
        indexed.sort_by(|a, b| a.0.cmp(b.0));

        let usb_ids = indexed
            .into_iter()
            .filter_map(|(idx, vid)| {
                let pid = properties.get(&format!("pid.{idx}"));
                if pid.is_none() {
                    tracing::warn!("Board '{id}' declares vid.{idx} without pid.{idx}, ignoring");
                }
                pid.map(|pid| UsbId::new(vid, pid))
            })
            .collect();

        Self {
            id: id.to_string(),
            name,
            properties,
            usb_ids,
            platform: PlatformRef::default(),
        }
    }

    /// Add a USB id pair
    #[must_use]
    pub fn with_usb_id(mut self, vid: &str, pid: &str) -> Self {
        self.usb_ids.push(UsbId::new(vid, pid));
        self
    }

    /// Set a property
    #[must_use]
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub(crate) fn with_platform(mut self, platform: PlatformRef) -> Self {
        self.platform = platform;
        self
    }

    /// The platform release this board belongs to
    pub fn platform(&self) -> &PlatformRef {
        &self.platform
    }

    /// Fully-qualified board name without menu options
    pub fn fqbn(&self) -> String {
        format!(
            "{}:{}:{}",
            self.platform.packager, self.platform.architecture, self.id
        )
    }

    /// Check whether the board declares the given USB id
    pub fn has_usb_id(&self, vid: &str, pid: &str) -> bool {
        self.usb_ids.iter().any(|usb| usb.matches(vid, pid))
    }
}
