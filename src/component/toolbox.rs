use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::component::tooltip::Tooltip;
use crate::style::ItemStyle;
use crate::value::NumericOrString;

/// Built-in utility buttons (export, restore, data view, zoom, chart-type
/// switching, brush selection).
///
/// ```JSON
/// {
///     "feature": {
///         "saveAsImage": {},
///         "dataZoom": { "yAxisIndex": "none" },
///         "magicType": { "type": ["line", "bar"] }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<ToolboxFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<ToolboxEmphasis>,
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
    pub tooltip: Option<Tooltip>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxEmphasis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ItemStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_as_image: Option<SaveAsImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore: Option<Restore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_view: Option<DataView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<ToolboxDataZoom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_type: Option<MagicType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush: Option<ToolboxBrush>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAsImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    // "png" or "jpg"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_components: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<ToolboxEmphasis>,
    // Export resolution multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<ToolboxEmphasis>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<ToolboxEmphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    // [view label, close label, refresh label]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textarea_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textarea_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
}

/// Which axes a zoom button controls: everything (`true`), nothing
/// (`false` / `"none"`), one index, or an index list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisFilter {
    Enabled(bool),
    None(String),
    Index(i64),
    Indices(Vec<i64>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxDataZoom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<ToolboxEmphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<AxisFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<AxisFilter>,
    // "filter", "weakFilter", "empty" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_style: Option<ItemStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    // Subset of "line", "bar", "stack"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<ToolboxEmphasis>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxBrush {
    // Subset of "rect", "polygon", "lineX", "lineY", "keep", "clear"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub brush_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::{AxisFilter, Toolbox};
    use serde_json::json;

    #[test]
    fn zoom_axis_filter_takes_every_wire_shape() {
        let wire = json!({
            "feature": {
                "dataZoom": { "yAxisIndex": "none", "xAxisIndex": [0, 2] },
                "saveAsImage": { "type": "png", "pixelRatio": 2.0 }
            }
        });
        let toolbox: Toolbox = serde_json::from_value(wire.clone()).unwrap();
        let zoom = toolbox
            .feature
            .as_ref()
            .unwrap()
            .data_zoom
            .as_ref()
            .unwrap();
        assert_eq!(zoom.y_axis_index, Some(AxisFilter::None("none".into())));
        assert_eq!(zoom.x_axis_index, Some(AxisFilter::Indices(vec![0, 2])));
        assert_eq!(serde_json::to_value(&toolbox).unwrap(), wire);
    }
}
