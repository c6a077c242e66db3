//! FIB-4 Calculator Library
//!
//! Core functionality for computing the FIB-4 liver fibrosis index from
//! age, AST, ALT, and platelet count.

pub mod build_info;
pub mod labs;
pub mod models;
pub mod scoring;
