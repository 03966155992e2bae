// File: crates/sparkline-core/src/lib.rs
// Summary: Core library entry point; exports the sparkline geometry, interaction and SVG API.

pub mod animation;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;
pub mod interaction;
pub mod path;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use animation::{schedule, AnimationSchedule, Easing, RevealAnimator, RevealPhase, REVEAL_DURATION};
pub use chart::Sparkline;
pub use color::{resolve, ColorPair, Rgb};
pub use config::{SparklineConfig, SparklineOptions};
pub use error::{Result, SparklineError};
pub use geometry::{map_points, polyline_length};
pub use id::{IdAllocator, InstanceId};
pub use interaction::{nearest_index, InteractionTracker, PointerEvent};
pub use path::{build_area, build_line, build_paths, PathSpec};
pub use series::{Series, SeriesKey};
pub use theme::GradientColors;
pub use types::{PlotExtent, Point};
