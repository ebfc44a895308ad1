//! Route handlers

pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
