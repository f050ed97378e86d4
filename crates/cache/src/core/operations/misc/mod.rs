//! Miscellaneous cache operations

mod clear;
mod stats;
