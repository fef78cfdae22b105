#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod logger;
pub mod model;
pub mod session;
pub mod storage;
pub mod tui;
