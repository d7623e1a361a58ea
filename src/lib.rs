//! App Constants Patch: deployment-time rewriting of dashboard constants.
//!
//! A library for locating and rewriting the service control URL and version
//! fields of a dashboard's JavaScript constants file, across every historical
//! declaration shape, without parsing JavaScript.

pub mod config;
pub mod patch;
