//! # Model Layer
//!
//! Persistence for the resolved swap configuration.

pub mod store;
