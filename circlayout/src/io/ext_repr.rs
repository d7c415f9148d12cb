use crate::layouts::LayoutType;
use serde::{Deserialize, Serialize};

/// External representation of a [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtContainer {
    pub width: i64,
    pub height: i64,
}

/// External representation of a placed circle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtItem {
    pub x: i64,
    pub y: i64,
    pub radius: i64,
}

/// External representation of an [`Arrangement`](crate::Arrangement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtArrangement {
    pub layout_type: LayoutType,
    pub container: ExtContainer,
    /// Items in insertion order
    pub items: Vec<ExtItem>,
}
