pub mod projector;
pub mod scale;
pub mod series;
pub mod types;

pub use projector::{AxisScales, DEFAULT_Y_AXIS_ID, ProjectedValue, Projector, project_point};
pub use scale::LinearScale;
pub use series::{Series, pad_series_to_common_length, validate_series_ids};
pub use types::{DataPoint, ScreenPoint, Viewport};
