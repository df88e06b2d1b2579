//! Service Quote - Configurable pricing engine for service quotes
//!
//! This crate turns step-by-step wizard selections into a running price for
//! each service type, seeds those wizards from recommendation presets, and
//! combines independently priced services with a discounted tier plan into a
//! single quote.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
