pub mod config;
pub mod euler;
pub mod load;
pub mod logging;
pub mod misc;
pub mod mst;
pub mod support;
