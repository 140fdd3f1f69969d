use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::GroundState;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse scenario json{}: {source}", format_json_path(.json_path))]
    Parse {
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize scenario: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write scenario file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn format_json_path(json_path: &str) -> String {
    if json_path.is_empty() || json_path == "." {
        String::new()
    } else {
        format!(" at {json_path}")
    }
}

pub fn load_ground_state(path: &Path) -> Result<GroundState, ScenarioError> {
    let raw = fs::read_to_string(path).map_err(|source| ScenarioError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let state = parse_ground_state(&raw)?;
    debug!(
        entities = state.entities.len(),
        groups = state.groups.len(),
        tracks = state.animation.tracks.len(),
        "loaded scenario"
    );
    Ok(state)
}

/// Parses the snapshot interchange JSON. Deserialization runs through
/// `serde_path_to_error` so a malformed field reports its JSON path.
///
/// Dangling track owners, dangling `groupId`s, and overlapping actions are
/// not rejected here; they are evaluation-time boundary conditions.
pub fn parse_ground_state(raw: &str) -> Result<GroundState, ScenarioError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize::<_, GroundState>(&mut deserializer).map_err(|error| {
        let json_path = error.path().to_string();
        ScenarioError::Parse {
            json_path,
            source: error.into_inner(),
        }
    })
}

pub fn save_ground_state(path: &Path, state: &GroundState) -> Result<(), ScenarioError> {
    let text = serde_json::to_string_pretty(state).map_err(ScenarioError::Serialize)?;
    write_text_atomic(path, &text).map_err(|source| ScenarioError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

// Write to a sibling temp file first so an interrupted save never leaves a
// truncated scenario behind.
fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = sibling_tmp_path(path);
    fs::write(&tmp_path, text)?;

    match fs::remove_file(path) {
        Ok(()) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(error);
        }
    }
    if let Err(error) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }
    Ok(())
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("scenario.json");
    path.with_file_name(format!("{file_name}.tmp"))
}
