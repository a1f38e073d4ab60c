//! 브레이튼(가스터빈) 사이클 관련 계산 모듈 모음.

pub mod brayton;
pub mod charts;
pub mod report;

pub use brayton::*;
pub use report::SteamSettings;
