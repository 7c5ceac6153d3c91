//! Option records for the series types, dispatched on the wire `type` key.

use serde::{Deserialize, Serialize};

pub mod bar;
pub mod boxplot;
pub mod candlestick;
pub mod funnel;
pub mod gauge;
pub mod graph;
pub mod heatmap;
pub mod line;
pub mod map;
pub mod pie;
pub mod radar;
pub mod sankey;
pub mod scatter;
pub mod sunburst;
pub mod treemap;

pub use bar::BarSeries;
pub use boxplot::BoxplotSeries;
pub use candlestick::CandlestickSeries;
pub use funnel::{FunnelItem, FunnelSeries};
pub use gauge::{GaugeItem, GaugeSeries};
pub use graph::{GraphCategory, GraphLink, GraphNode, GraphSeries};
pub use heatmap::HeatmapSeries;
pub use line::LineSeries;
pub use map::{MapItem, MapSeries};
pub use pie::{PieItem, PieSeries};
pub use radar::{RadarItem, RadarSeries};
pub use sankey::{SankeyLink, SankeyNode, SankeySeries};
pub use scatter::{EffectScatterSeries, ScatterSeries};
pub use sunburst::{SunburstItem, SunburstSeries};
pub use treemap::{TreemapItem, TreemapSeries};

/// One entry of the `series` array. The `type` key picks the record; every
/// other key belongs to that record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Series {
    Line(LineSeries),
    Bar(BarSeries),
    Pie(PieSeries),
    Scatter(ScatterSeries),
    EffectScatter(EffectScatterSeries),
    Radar(RadarSeries),
    Funnel(FunnelSeries),
    Gauge(GaugeSeries),
    Graph(GraphSeries),
    Heatmap(HeatmapSeries),
    Map(MapSeries),
    Sankey(SankeySeries),
    Candlestick(CandlestickSeries),
    Boxplot(BoxplotSeries),
    Treemap(TreemapSeries),
    Sunburst(SunburstSeries),
}

impl Series {
    /// The series name as given in the option, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Series::Line(s) => s.name.as_deref(),
            Series::Bar(s) => s.name.as_deref(),
            Series::Pie(s) => s.name.as_deref(),
            Series::Scatter(s) => s.name.as_deref(),
            Series::EffectScatter(s) => s.name.as_deref(),
            Series::Radar(s) => s.name.as_deref(),
            Series::Funnel(s) => s.name.as_deref(),
            Series::Gauge(s) => s.name.as_deref(),
            Series::Graph(s) => s.name.as_deref(),
            Series::Heatmap(s) => s.name.as_deref(),
            Series::Map(s) => s.name.as_deref(),
            Series::Sankey(s) => s.name.as_deref(),
            Series::Candlestick(s) => s.name.as_deref(),
            Series::Boxplot(s) => s.name.as_deref(),
            Series::Treemap(s) => s.name.as_deref(),
            Series::Sunburst(s) => s.name.as_deref(),
        }
    }

    /// The wire value of the `type` key.
    pub fn kind(&self) -> &'static str {
        match self {
            Series::Line(_) => "line",
            Series::Bar(_) => "bar",
            Series::Pie(_) => "pie",
            Series::Scatter(_) => "scatter",
            Series::EffectScatter(_) => "effectScatter",
            Series::Radar(_) => "radar",
            Series::Funnel(_) => "funnel",
            Series::Gauge(_) => "gauge",
            Series::Graph(_) => "graph",
            Series::Heatmap(_) => "heatmap",
            Series::Map(_) => "map",
            Series::Sankey(_) => "sankey",
            Series::Candlestick(_) => "candlestick",
            Series::Boxplot(_) => "boxplot",
            Series::Treemap(_) => "treemap",
            Series::Sunburst(_) => "sunburst",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Series;
    use serde_json::json;

    #[test]
    fn dispatch_covers_every_type_tag() {
        let tags = [
            "line",
            "bar",
            "pie",
            "scatter",
            "effectScatter",
            "radar",
            "funnel",
            "gauge",
            "graph",
            "heatmap",
            "map",
            "sankey",
            "candlestick",
            "boxplot",
            "treemap",
            "sunburst",
        ];

        for tag in tags {
            let wire = json!({ "type": tag, "name": "s1" });
            let series: Series = serde_json::from_value(wire.clone()).unwrap();
            assert_eq!(series.kind(), tag);
            assert_eq!(series.name(), Some("s1"));
            assert_eq!(serde_json::to_value(&series).unwrap(), wire);
        }
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let wire = json!({ "type": "starfield" });
        assert!(serde_json::from_value::<Series>(wire).is_err());
    }
}
