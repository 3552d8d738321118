//! 팬 성능 시뮬레이션 엔진: 곡선 보간, 시스템 곡선, 운전점, 다중 팬 곡선 정렬.

pub mod align;
pub mod curve;
pub mod interpolate;
pub mod operating_point;
pub mod system_curve;

pub use align::*;
pub use curve::*;
pub use interpolate::*;
pub use operating_point::*;
pub use system_curve::*;
