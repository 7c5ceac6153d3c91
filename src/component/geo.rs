use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::component::tooltip::Tooltip;
use crate::style::{Blur, Emphasis, ItemStyle, Label, ScaleLimit, Select};
use crate::value::{BoolOrString, NumericOrString};

/// Geographic coordinate system backed by a registered map.
///
/// ```JSON
/// {
///     "map": "world",
///     "roam": "move",
///     "selectedMode": "single"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    // Name the map was registered under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    // true, false, "scale" or "move"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roam: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_scale: Option<f64>,
    // [[left, bottom], [right, top]] in map coordinates
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
    // true, false, "single" or "multiple"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
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
    // Anchor point, used together with layoutSize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_center: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_size: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<GeoRegion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

/// Per-region style override, matched by region name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRegion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

#[cfg(test)]
mod tests {
    use super::Geo;
    use crate::value::BoolOrString;
    use serde_json::json;

    #[test]
    fn roam_round_trips_both_arms() {
        let wire = json!({ "map": "world", "roam": "scale" });
        let geo: Geo = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(geo.roam, Some(BoolOrString::String("scale".into())));
        assert_eq!(serde_json::to_value(&geo).unwrap(), wire);

        let wire = json!({ "map": "world", "roam": true });
        let geo: Geo = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(geo.roam.as_ref().unwrap().as_bool().unwrap(), true);
        assert_eq!(serde_json::to_value(&geo).unwrap(), wire);
    }
}
