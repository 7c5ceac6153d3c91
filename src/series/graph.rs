use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::style::{
    Blur, Emphasis, ItemStyle, Label, LabelLayout, LineStyle, MarkArea, MarkLine, MarkPoint,
    Select,
};
use crate::value::{BoolOrNumber, BoolOrString, NumericOrString, OneOrMany};

/// Node-link series with circular, force-directed or fixed layouts.
///
/// ```JSON
/// {
///     "type": "graph",
///     "layout": "force",
///     "roam": true,
///     "data": [{ "name": "a" }, { "name": "b" }],
///     "links": [{ "source": "a", "target": "b" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_hover_link: Option<bool>,
    // "none" (fixed x/y on nodes), "circular" or "force"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circular: Option<GraphCircular>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<GraphForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_index: Option<i64>,
    // true, false, "scale" or "move"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roam: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_limit: Option<crate::style::ScaleLimit>,
    // Degree-scaled node size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_scale_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_keep_aspect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_offset: Option<Vec<NumericOrString>>,
    // [source-end, target-end], e.g. ["circle", "arrow"]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_symbol: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_symbol_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_layout: Option<LabelLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    // true, or the edge count above which curves are computed automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_curveness: Option<BoolOrNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<GraphCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<GraphNode>>,
    // Kept as an alias for data on the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<GraphNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<GraphLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<GraphLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_point: Option<MarkPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_area: Option<MarkArea>,
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
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
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
pub struct GraphCircular {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_label: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphForce {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_layout: Option<String>,
    // One value, or [min, max] scaled by node size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repulsion: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_length: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_animation: Option<bool>,
    // Velocity damping factor in (0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f64>,
}

/// One node. Position fields only matter for the "none" layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<OneOrMany<Number>>,
    // Index into the series' categories list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}

/// One edge, keyed by node name or index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<OneOrMany<Number>>,
    // Avoid overlap when two nodes share several edges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_force_layout: Option<bool>,
}

/// Node grouping: members inherit the category's symbol and styles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

#[cfg(test)]
mod tests {
    use super::GraphSeries;
    use crate::value::{BoolOrString, NumericOrString, OneOrMany};
    use serde_json::json;

    #[test]
    fn force_layout_with_nodes_and_links_round_trips() {
        let wire = json!({
            "layout": "force",
            "roam": true,
            "force": { "repulsion": [50, 120], "gravity": 0.1 },
            "edgeSymbol": ["none", "arrow"],
            "data": [
                { "name": "a", "category": 0 },
                { "name": "b", "category": 1 }
            ],
            "links": [{ "source": "a", "target": "b", "value": 3.0 }],
            "categories": [{ "name": "first" }, { "name": "second" }]
        });
        let series: GraphSeries = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(series.roam, Some(BoolOrString::Bool(true)));
        assert_eq!(
            series.force.as_ref().unwrap().repulsion.as_ref().unwrap().len(),
            2
        );
        let link = &series.links.as_ref().unwrap()[0];
        assert_eq!(
            link.source,
            Some(NumericOrString::String("a".into()))
        );
        match series.edge_symbol.as_ref().unwrap() {
            OneOrMany::Many(ends) => assert_eq!(ends.len(), 2),
            other => panic!("expected a symbol pair, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&series).unwrap(), wire);
    }
}
