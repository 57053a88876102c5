use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub i32);

impl MenuId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for MenuId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Attributes
// ============================================================================

/// HTML attribute hints stored alongside a menu record.
///
/// Persisted as JSON text, e.g. `{"options":{"class":"header"},"linkOptions":{"target":"_blank"}}`.
/// The values are plain data and are never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuAttributes {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,

    #[serde(rename = "linkOptions", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub link_options: BTreeMap<String, String>,
}

impl MenuAttributes {
    /// Decode the stored `data` column. Missing, blank or malformed text yields empty attributes.
    pub fn from_data(data: Option<&str>) -> Self {
        let Some(raw) = data.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(attributes) => attributes,
            Err(e) => {
                tracing::warn!("Ignoring malformed menu attributes {:?}: {}", raw, e);
                Self::default()
            }
        }
    }

    /// Encode for storage; `None` when there is nothing to store.
    pub fn to_data(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        serde_json::to_string(self).ok()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.link_options.is_empty()
    }
}

// ============================================================================
// Record
// ============================================================================

/// Flat menu entry referencing its parent by id. `parent == None` marks a root entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuId,
    pub name: String,

    #[serde(rename = "parentId", default)]
    pub parent: Option<MenuId>,

    #[serde(default)]
    pub route: Option<String>,

    /// Sort key among siblings; entries without one come first.
    #[serde(default)]
    pub order: Option<i32>,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub attributes: MenuAttributes,
}

impl MenuRecord {
    pub fn new(id: impl Into<MenuId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: None,
            route: None,
            order: None,
            icon: None,
            attributes: MenuAttributes::default(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<MenuId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_attributes(mut self, attributes: MenuAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Icon name if one is set and not blank.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|s| !s.trim().is_empty())
    }
}
