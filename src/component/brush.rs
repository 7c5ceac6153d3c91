use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::value::OneOrMany;

/// Area-selection component: lets the user sweep out rectangles, polygons or
/// axis bands and links the covered data across series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brush {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    // Toolbox buttons to surface, subset of ["rect","polygon","lineX","lineY","keep","clear"]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbox: Option<Vec<String>>,
    // Series indexes linked to the selection, or "all" / "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_link: Option<BrushTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_index: Option<BrushTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_index: Option<BrushTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<BrushTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<BrushTargets>,
    // "rect", "polygon", "lineX" or "lineY"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_type: Option<String>,
    // "single" or "multiple"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_mode: Option<String>,
    // Selected boxes stay resizable/movable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_style: Option<BrushStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_on_click: Option<bool>,
    // Visual channels applied to data inside / outside the selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_brush: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_brush: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
}

/// Index filter: "all"/"none", one index, or an index list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrushTargets {
    Keyword(String),
    Index(i64),
    Indices(Vec<i64>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<OneOrMany<Number>>,
}
