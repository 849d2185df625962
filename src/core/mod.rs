#![forbid(unsafe_code)]

//! Core primitives.

/// Line-oriented admission service (JSON requests in, verdicts out).
pub mod admission;
/// Ante handler pipeline (decorators and continuations).
pub mod ante;
/// Node configuration file.
pub mod config;
/// Transaction filter: policy compiler and admission decorator.
pub mod txfilter;
/// Transaction and execution-context types.
pub mod types;
