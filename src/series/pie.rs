use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::{
    Blur, Emphasis, ItemStyle, Label, LabelLayout, LabelLine, MarkArea, MarkLine, MarkPoint,
    Select,
};
use crate::value::{BoolOrString, NumericOrString, OneOrMany};

/// Pie / donut / rose series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_hover_link: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockwise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_angle: Option<f64>,
    // Sectors below this angle show no label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_show_label_angle: Option<f64>,
    // false, "radius" or "area"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rose_type: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_label_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub still_show_zero_sum: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_empty_circle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_circle_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_line: Option<LabelLine>,
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
    // [x, y] as pixels or percents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<NumericOrString>>,
    // Outer radius, or [inner, outer] for a donut
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<OneOrMany<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_point: Option<MarkPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_area: Option<MarkArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_layout_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<PieItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_type_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universal_transition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}

/// One sector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_line: Option<LabelLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}
