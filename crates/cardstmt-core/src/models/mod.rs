//! Data models for statement records and configuration.

pub mod config;
pub mod statement;
