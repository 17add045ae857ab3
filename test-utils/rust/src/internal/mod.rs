//! Internal implementation details

pub mod conversions;
