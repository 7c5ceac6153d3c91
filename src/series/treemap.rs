use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::style::{Blur, Emphasis, ItemStyle, Label, LabelLayout, Select};
use crate::value::{BoolOrString, NumericOrString, OneOrMany};

/// Treemap series: nested rectangles sized by value, drill-down per level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<NumericOrString>,
    // Golden ratio by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_ratio: Option<f64>,
    // Only render this many levels below the current root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drill_down_icon: Option<String>,
    // false, "zoomToNode" or "link"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_click: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_to_node_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_dimension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_alpha: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_saturation: Option<Vec<f64>>,
    // "value", "index" or "id"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mapping_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_visible_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_layout: Option<LabelLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<TreemapBreadcrumb>,
    // Per-depth defaults; entry 0 covers the whole tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<TreemapLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<TreemapItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universal_transition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapBreadcrumb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_item_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_dimension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_alpha: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_saturation: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mapping_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_visible_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
}

/// One node; `children` nests the same shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreemapItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // Value, or [value, extra visual dimensions...]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_dimension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_alpha: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_saturation: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mapping_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_visible_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreemapItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}
