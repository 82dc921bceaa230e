//! Fixture loading for board seed data
//!
//! The default seed ships inside the binary and mirrors the web app's
//! literal sample posts. A JSON file with the same shape can replace it via
//! `--fixture` or `COMMU_FIXTURE_PATH`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::models::{BoardKind, Post};

const EMBEDDED_SEED: &str = include_str!("../fixtures/posts.json");

/// Seed posts for every board.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub cover_letter: Vec<Post>,
    #[serde(default)]
    pub free: Vec<Post>,
    #[serde(default)]
    pub hot_issue: Vec<Post>,
}

impl Fixture {
    pub fn board(&self, kind: BoardKind) -> &[Post] {
        match kind {
            BoardKind::CoverLetter => &self.cover_letter,
            BoardKind::Free => &self.free,
            BoardKind::HotIssue => &self.hot_issue,
        }
    }

    pub fn into_board(self, kind: BoardKind) -> Vec<Post> {
        match kind {
            BoardKind::CoverLetter => self.cover_letter,
            BoardKind::Free => self.free,
            BoardKind::HotIssue => self.hot_issue,
        }
    }
}

/// Parse the embedded seed.
pub fn embedded() -> Result<Fixture> {
    serde_json::from_str(EMBEDDED_SEED).context("embedded fixture is not valid JSON")
}

/// Load a fixture file from disk.
pub fn from_path(path: &Path) -> Result<Fixture> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read fixture file: {}", path.display()))?;
    let fixture: Fixture = serde_json::from_str(&raw)
        .with_context(|| format!("invalid fixture JSON: {}", path.display()))?;
    info!(
        path = %path.display(),
        cover_letter = fixture.cover_letter.len(),
        free = fixture.free.len(),
        hot_issue = fixture.hot_issue.len(),
        "fixture loaded"
    );
    Ok(fixture)
}

/// Load from `path` when given, otherwise fall back to the embedded seed.
pub fn load(path: Option<&Path>) -> Result<Fixture> {
    match path {
        Some(path) => from_path(path),
        None => embedded(),
    }
}
