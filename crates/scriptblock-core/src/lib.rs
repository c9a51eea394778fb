//! Core types for scriptblock.
//!
//! This crate matches named configuration blocks (`buildscript`,
//! `initscript`) to the script context they are declared in and evaluates
//! them against a capability-scoped view of the context's configuration
//! target. It also carries the global configuration and the declarative
//! block manifests consumed by the CLI.
//!
//! Everything here is synchronous and free of network I/O.

pub mod config;
pub mod context;
pub mod dependency;
pub mod dispatch;
pub mod manifest;
pub mod provider;
pub mod repository;
pub mod scope;
pub mod script;
pub mod target;
