//! 팬 카탈로그: 레코드, 메모리 저장소, 선정 필터, 비교, 경제성 분석.

pub mod compare;
pub mod economics;
pub mod fan;
pub mod filter;
pub mod store;

pub use compare::*;
pub use economics::*;
pub use fan::*;
pub use filter::*;
pub use store::*;
