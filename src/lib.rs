pub mod cli;
pub mod commands;
pub mod config;
pub mod container;
pub mod icon;
pub mod plan;
pub mod targets;
