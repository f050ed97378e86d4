//! Cache operations module
//!
//! Operations are implemented directly on `StrategicCache`, one file per
//! concern.

mod get;
mod lifecycle;
mod misc;
mod put;
mod remove;
