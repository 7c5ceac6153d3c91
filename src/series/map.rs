use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::style::{
    Blur, Emphasis, ItemStyle, Label, LabelLayout, MarkArea, MarkLine, MarkPoint, ScaleLimit,
    Select,
};
use crate::value::{BoolOrString, NumericOrString, OneOrMany};

/// Choropleth series: region shapes from a registered map, shaded by value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    // true, false, "scale" or "move"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roam: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_coords: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_limit: Option<ScaleLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_map: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
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
    pub layout_center: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_size: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_index: Option<i64>,
    // "sum", "average", "max" or "min", for joining several data entries
    // that land on one region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_value_calculation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_legend_symbol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_point: Option<MarkPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_area: Option<MarkArea>,
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
    pub data: Option<Vec<MapItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universal_transition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}

/// One region's value and overrides, matched by region name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}
