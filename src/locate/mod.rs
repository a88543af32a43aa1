pub mod measure;
pub mod metrics;
pub mod position;

pub use measure::{AverageWidthMeasure, GlyphMeasure, TextMeasure};
pub use metrics::{BoxMetrics, CharLocation};
pub use position::{locate, location_of};
