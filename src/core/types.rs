//! Core Type Definitions
//!
//! Defines fundamental types used throughout the project.

/// Canonical asset path within the host's asset database
/// (e.g. `"Assets/Prefabs/Hero.prefab"`)
pub type AssetPath = String;
