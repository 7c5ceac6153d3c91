use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::color::Color;
use crate::style::{ItemStyle, LineStyle, TextStyle};
use crate::value::{BoolOrString, NumericOrString, OneOrMany};

/// Legend component, either the plain or the paged ("scroll") variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    // "plain" or "scroll"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub legend_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
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
    pub orient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    // true, false, "single" or "multiple"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border_width: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<HashMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    // Entries are series names or per-item objects; both shapes pass through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_data_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_button_item_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_button_gap: Option<f64>,
    // "start" or "end"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_button_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_formatter: Option<String>,
    // Per-direction page icons, e.g. {"horizontal": [..], "vertical": [..]}
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_icons: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_icon_inactive_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_icon_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_label: Option<Value>,
    // "start" or "end"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_item_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_button_gap: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::Legend;
    use crate::value::BoolOrString;
    use serde_json::json;

    #[test]
    fn selected_mode_accepts_bool_and_string() {
        let legend: Legend =
            serde_json::from_value(json!({ "selectedMode": "single" })).unwrap();
        assert_eq!(
            legend.selected_mode.as_ref().unwrap().as_str(),
            Some("single")
        );

        let legend: Legend = serde_json::from_value(json!({ "selectedMode": false })).unwrap();
        assert_eq!(legend.selected_mode, Some(BoolOrString::Bool(false)));
        assert_eq!(
            serde_json::to_value(&legend).unwrap(),
            json!({ "selectedMode": false })
        );
    }
}
