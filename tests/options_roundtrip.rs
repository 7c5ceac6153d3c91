//! Whole-document fixtures: parse a realistic option object, inspect a few
//! fields through the typed tree, and check the rewritten wire form.

use chart_options::component::data_zoom::DataZoom;
use chart_options::component::visual_map::VisualMap;
use chart_options::{ChartOptions, Series, parse_options};
use serde_json::json;

#[test]
fn calendar_heatmap_document() {
    let wire = json!({
        "title": { "text": "Daily activity", "left": "center" },
        "tooltip": { "position": "top" },
        "visualMap": {
            "type": "continuous",
            "min": 0.0,
            "max": 300.0,
            "calculable": true,
            "orient": "horizontal",
            "left": "center"
        },
        "calendar": {
            "range": "2017",
            "cellSize": ["auto", 20],
            "dayLabel": { "firstDay": 1, "nameMap": "en" }
        },
        "series": [{
            "type": "heatmap",
            "coordinateSystem": "calendar",
            "data": [["2017-01-01", 120], ["2017-01-02", 260]]
        }]
    });

    let options = ChartOptions::from_value(wire.clone()).unwrap();

    let calendar = options.calendar.as_ref().unwrap().get(0).unwrap();
    assert!(!calendar.cell_size.as_ref().unwrap().is_singular());
    assert_eq!(
        calendar.day_label.as_ref().unwrap().first_day,
        Some(1)
    );

    match options.visual_map.as_ref().unwrap().get(0).unwrap() {
        VisualMap::Continuous(map) => assert_eq!(map.max, Some(300.0)),
        other => panic!("expected continuous visual map, got {other:?}"),
    }

    assert_eq!(options.to_value().unwrap(), wire);
}

#[test]
fn funnel_document() {
    let wire = json!({
        "title": { "text": "Conversion" },
        "tooltip": { "trigger": "item", "formatter": "{a} <br/>{b} : {c}%" },
        "legend": { "data": ["Visit", "Inquiry", "Order"] },
        "series": [{
            "type": "funnel",
            "name": "Expected",
            "left": "10%",
            "top": 60,
            "width": "80%",
            "min": 0.0,
            "max": 100.0,
            "minSize": "0%",
            "maxSize": "100%",
            "sort": "descending",
            "gap": 2.0,
            "label": { "show": true, "position": "inside" },
            "itemStyle": { "borderColor": "#fff", "borderWidth": 1.0 },
            "data": [
                { "name": "Visit", "value": 60.0 },
                { "name": "Inquiry", "value": 40.0 },
                { "name": "Order", "value": 20.0 }
            ]
        }]
    });

    let options = ChartOptions::from_value(wire.clone()).unwrap();

    let series = options.series.as_ref().unwrap();
    assert_eq!(series.len(), 1);
    let funnel = match series.get(0).unwrap() {
        Series::Funnel(funnel) => funnel,
        other => panic!("expected funnel series, got {other:?}"),
    };
    assert_eq!(funnel.sort.as_deref(), Some("descending"));
    assert_eq!(funnel.data.as_ref().unwrap()[2].value, Some(20.0));
    // "10%" and 60 keep their respective wire shapes
    assert_eq!(funnel.left.as_ref().unwrap().as_str(), Some("10%"));
    assert!(funnel.top.as_ref().unwrap().is_number());

    assert_eq!(options.to_value().unwrap(), wire);
}

#[test]
fn zoomable_line_document() {
    let wire = json!({
        "legend": {},
        "xAxis": [{ "type": "category", "boundaryGap": false, "data": ["Mon", "Tue", "Wed"] }],
        "yAxis": [{ "type": "value" }],
        "dataZoom": [
            { "type": "inside", "start": 0.0, "end": 40.0 },
            { "type": "slider", "show": true }
        ],
        "series": [{
            "type": "line",
            "smooth": 0.3,
            "areaStyle": {},
            "data": [120, 200, 150]
        }]
    });

    let options = ChartOptions::from_value(wire.clone()).unwrap();

    let zooms = options.data_zoom.as_ref().unwrap();
    assert_eq!(zooms.len(), 2);
    assert!(matches!(zooms.get(0), Some(DataZoom::Inside(_))));
    assert!(matches!(zooms.get(1), Some(DataZoom::Slider(_))));

    assert_eq!(options.to_value().unwrap(), wire);
}

#[test]
fn reparse_yields_an_equal_tree() {
    let source = r##"{
        "geo": { "map": "world", "roam": "scale", "selectedMode": "single" },
        "series": [
            { "type": "graph", "layout": "circular", "roam": true },
            { "type": "map", "map": "world", "data": [{ "name": "France", "value": 64.0 }] }
        ],
        "backgroundColor": "#100C2A"
    }"##;

    let first = parse_options(source).unwrap();
    let rewritten = first.to_json_string().unwrap();
    let second = parse_options(&rewritten).unwrap();
    assert_eq!(first, second);
}
