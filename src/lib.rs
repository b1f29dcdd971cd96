//! Metadev - translation key extraction for React projects
//!
//! Metadev scans `.tsx` sources for `useTranslation` aliases and their
//! `tAlias('key')` calls, writes one JSON dictionary per namespace, and merges
//! existing dictionaries without losing translated values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Two-pass extraction engine and dictionary merging

pub mod cli;
pub mod config;
pub mod core;
