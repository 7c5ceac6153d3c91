//! Option records for the non-series chart components: coordinate systems,
//! axes, controls and decorations.

pub mod axis;
pub mod axis_pointer;
pub mod brush;
pub mod calendar;
pub mod data_zoom;
pub mod dataset;
pub mod geo;
pub mod grid;
pub mod legend;
pub mod parallel;
pub mod polar;
pub mod radar;
pub mod single_axis;
pub mod timeline;
pub mod title;
pub mod toolbox;
pub mod tooltip;
pub mod visual_map;

pub use axis::{Axis, AxisLabel, AxisLine, AxisTick, AxisType, BoundaryGap, SplitArea, SplitLine};
pub use axis_pointer::AxisPointer;
pub use brush::Brush;
pub use calendar::Calendar;
pub use data_zoom::{DataZoom, InsideDataZoom, SliderDataZoom};
pub use dataset::Dataset;
pub use geo::{Geo, GeoRegion};
pub use grid::Grid;
pub use legend::Legend;
pub use parallel::{Parallel, ParallelAxis};
pub use polar::{AngleAxis, Polar, RadiusAxis};
pub use radar::{Radar, RadarIndicator};
pub use single_axis::SingleAxis;
pub use timeline::Timeline;
pub use title::Title;
pub use toolbox::Toolbox;
pub use tooltip::Tooltip;
pub use visual_map::{ContinuousVisualMap, PiecewiseVisualMap, VisualMap};
