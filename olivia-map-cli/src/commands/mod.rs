//! CLI command implementations.
//!
//! Each subcommand has its own module with its handler.
//!
//! # Command Modules
//!
//! - [`click`] - Pin update for a map click
//! - [`config`] - Configuration management (init, path, show)
//! - [`inspect`] - Result cube summary
//! - [`layers`] - Base layer catalog listing
//! - [`points`] - Point layer markers
//! - [`resolve`] - Base layer resolution
//! - [`view`] - Map view

pub mod click;
pub mod common;
pub mod config;
pub mod inspect;
pub mod layers;
pub mod points;
pub mod resolve;
pub mod view;
