use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::style::{AreaStyle, ItemStyle, LineStyle, TextStyle};
use crate::value::{BoolOrString, NumericOrString, OneOrMany};

/// Window over the data, dispatched on its `type` key: `inside` zooms by
/// gesture inside the coordinate system, `slider` adds a draggable strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataZoom {
    Inside(InsideDataZoom),
    Slider(SliderDataZoom),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsideDataZoom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_axis_index: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_axis_index: Option<OneOrMany<serde_json::Number>>,
    // "filter", "weakFilter", "empty" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    // Window bounds in percent of the full data extent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    // Window bounds in data values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_value: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_value: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value_span: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value_span: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,
    // Freeze the window size: pan only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle: Option<f64>,
    // ["percent"|"value", "percent"|"value"] for [start, end]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_mode: Option<Vec<String>>,
    // true, false, "shift", "ctrl" or "alt"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_on_mouse_wheel: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_on_mouse_move: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_on_mouse_wheel: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_default_mouse_move: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderDataZoom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_background: Option<DataBackground>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_data_background: Option<DataBackground>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filler_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_icon: Option<String>,
    // Pixels, or a percent of the strip height like "120%"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_size: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_handle_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_handle_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_handle_style: Option<ItemStyle>,
    // "auto" or a digit count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_precision: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_detail: Option<bool>,
    // true, false or "auto"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_data_shadow: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_axis_index: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_axis_index: Option<OneOrMany<serde_json::Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_value: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_value: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value_span: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value_span: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_mode: Option<Vec<String>>,
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
    // Select a range by dragging on the strip instead of moving handles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_select: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<DataZoomEmphasis>,
}

/// Miniature of the zoomed series drawn inside the slider strip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBackground {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoomEmphasis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_handle_style: Option<ItemStyle>,
}

#[cfg(test)]
mod tests {
    use super::DataZoom;
    use crate::value::BoolOrString;
    use serde_json::json;

    #[test]
    fn variant_dispatch_follows_the_type_key() {
        let wire = json!({ "type": "inside", "zoomOnMouseWheel": "shift" });
        let zoom: DataZoom = serde_json::from_value(wire.clone()).unwrap();
        match &zoom {
            DataZoom::Inside(inside) => {
                assert_eq!(
                    inside.zoom_on_mouse_wheel,
                    Some(BoolOrString::String("shift".into()))
                );
            }
            other => panic!("expected inside zoom, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&zoom).unwrap(), wire);

        let wire = json!({ "type": "slider", "start": 20.0, "end": 80.0 });
        let zoom: DataZoom = serde_json::from_value(wire.clone()).unwrap();
        assert!(matches!(zoom, DataZoom::Slider(_)));
        assert_eq!(serde_json::to_value(&zoom).unwrap(), wire);
    }
}
