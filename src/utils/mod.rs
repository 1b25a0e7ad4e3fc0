//! Utility modules: on-disk JSON persistence.

pub mod persistence;
