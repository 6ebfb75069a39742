pub mod config;
pub mod logging;

pub mod fetcher;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod storage;
