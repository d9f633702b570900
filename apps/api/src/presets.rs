//! Benchmark job-description presets.
//!
//! Five canned JDs ship with the service so users can rank resumes without
//! pasting their own description. The texts live as plain files under the
//! configured JD directory and are read once at startup.

use std::collections::HashMap;
use std::path::Path;

use axum::extract::{Path as UrlPath, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Preset display name → file name under the JD directory.
const PRESET_FILES: &[(&str, &str)] = &[
    ("Data Analyst", "data analyst jd.txt"),
    ("Frontend Developer", "frontend developer jd.txt"),
    ("Backend Developer", "back end developer jd.txt"),
    ("Full-stack Developer", "full stack developer jd.txt"),
    ("AI Engineer", "ai engineer jd.txt"),
];

#[derive(Debug, Clone, Serialize)]
pub struct JdPreset {
    pub name: String,
    pub text: String,
}

/// In-memory preset catalog, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    presets: HashMap<String, JdPreset>,
    // Presentation order follows PRESET_FILES, not the map
    order: Vec<String>,
}

impl PresetStore {
    /// Reads every known preset file under `dir`. Files that are missing or
    /// unreadable are skipped with a warning so one absent JD does not take
    /// the whole catalog down.
    pub fn load(dir: &Path) -> Self {
        let mut store = Self::default();
        if !dir.is_dir() {
            warn!("JD preset directory {:?} not found; no presets loaded", dir);
            return store;
        }
        for (name, file) in PRESET_FILES {
            let path = dir.join(file);
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    store.order.push((*name).to_string());
                    store.presets.insert(
                        (*name).to_string(),
                        JdPreset {
                            name: (*name).to_string(),
                            text,
                        },
                    );
                }
                Err(e) => {
                    warn!("skipping JD preset '{}': cannot read {:?}: {}", name, path, e);
                }
            }
        }
        store
    }

    pub fn get(&self, name: &str) -> Option<&JdPreset> {
        self.presets.get(name)
    }

    /// Preset names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// GET /api/v1/presets — the list of available preset names.
pub async fn handle_list_presets(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.presets.names().into_iter().map(String::from).collect())
}

/// GET /api/v1/presets/:name — one preset with its full text.
pub async fn handle_get_preset(
    State(state): State<AppState>,
    UrlPath(name): UrlPath<String>,
) -> Result<Json<JdPreset>, AppError> {
    state
        .presets
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("unknown benchmark JD preset '{name}'")))
}
