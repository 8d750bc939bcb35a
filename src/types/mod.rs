pub mod config;
pub mod entity;
pub mod report;
pub mod scoring;
