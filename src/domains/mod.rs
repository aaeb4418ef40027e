//! Domains module containing the toolbox features, one bounded context each.

pub mod admin;
pub mod ai;
pub mod catalog;
pub mod preferences;
pub mod resources;
pub mod shell;
pub mod tools;
