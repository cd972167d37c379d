pub mod api;
pub mod config;
pub mod gateway;
pub mod stats;
pub mod storage;
