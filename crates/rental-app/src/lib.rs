//! Application service layer - config, store access, queries, booking workflow

pub mod app;
pub mod config;
pub mod repository;
