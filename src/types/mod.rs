pub mod config;
pub mod dataset;
pub mod metadata;
pub mod report;
pub mod scoring;
pub mod timestamp;
