//! Shared fixtures for questkit integration tests.
//!
//! Fixture data lives under `fixtures/` at the workspace root and is indexed
//! by `fixtures/manifest.json`. This crate returns raw JSON strings so it
//! depends on no core crate; consumers deserialize with their own types.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    skeletons: HashMap<String, String>,
    animations: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Names of the skeleton fixtures, sorted for stable test output.
pub fn skeleton_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.skeletons.keys().cloned().collect();
    names.sort();
    names
}

/// Names of the animation clip fixtures, sorted for stable test output.
pub fn clip_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.animations.keys().cloned().collect();
    names.sort();
    names
}

/// Raw JSON for a skeleton fixture.
pub fn skeleton_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .skeletons
        .get(name)
        .ok_or_else(|| anyhow!("unknown skeleton fixture '{name}'"))?;
    read_to_string(rel)
}

/// Raw JSON for an animation clip fixture.
pub fn clip_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .animations
        .get(name)
        .ok_or_else(|| anyhow!("unknown animation fixture '{name}'"))?;
    read_to_string(rel)
}
