//! Profile commands. Each works on an in-memory [`Profile`]; only
//! [`read_profile`] and [`write_output`] touch the filesystem.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::Path;

use canvas::color::{canonical_hex, is_valid_color};
use canvas::geometry::Extent;
use canvas::profile::{ConnectionState, Profile};

use crate::CliError;

pub fn read_profile(path: &Path) -> Result<Profile, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })?;
    let profile =
        Profile::from_json(&raw).map_err(|source| CliError::Profile { path: path.to_owned(), source })?;
    tracing::debug!(boxes = profile.boxes.len(), connections = profile.connections.len(), "read {}", path.display());
    Ok(profile)
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|source| CliError::Write { path: path.to_owned(), source })?;
            tracing::info!(bytes = content.len(), "wrote {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .map_err(|source| CliError::Write { path: "<stdout>".into(), source })
        }
    }
}

// =============================================================
// inspect
// =============================================================

/// Summary printed by `inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub boxes: usize,
    pub connections: usize,
    pub dangling: usize,
    pub extent: Extent,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "boxes:       {}", self.boxes)?;
        writeln!(f, "connections: {} ({} dangling)", self.connections, self.dangling)?;
        writeln!(f, "extent:      {} x {}", self.extent.width, self.extent.height)
    }
}

pub fn inspect(profile: &Profile) -> InspectReport {
    let (doc, _) = profile.clone().into_doc();
    InspectReport {
        boxes: profile.boxes.len(),
        connections: profile.connections.len(),
        dangling: profile.dangling_connections().len(),
        extent: canvas::geometry::canvas_extent(&doc),
    }
}

// =============================================================
// validate
// =============================================================

/// Problems found by `validate`. Colors the parser does not know are reported
/// as warnings only: the editor hands them to the browser unchanged, so valid
/// CSS such as `hsl()` or named colors still renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub dangling: Vec<ConnectionState>,
    pub duplicate_ids: Vec<String>,
    pub unknown_colors: Vec<(String, String)>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.dangling.is_empty() && self.duplicate_ids.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.dangling.len() + self.duplicate_ids.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for conn in &self.dangling {
            writeln!(f, "dangling connection: {} -> {}", conn.from_box_id, conn.to_box_id)?;
        }
        for id in &self.duplicate_ids {
            writeln!(f, "duplicate box id: {id}")?;
        }
        for (id, color) in &self.unknown_colors {
            writeln!(f, "warning: box {id} has unrecognized color {color:?}")?;
        }
        if self.is_ok() {
            writeln!(f, "ok")?;
        }
        Ok(())
    }
}

pub fn validate(profile: &Profile) -> ValidationReport {
    let mut seen = HashSet::new();
    let mut duplicate_ids = Vec::new();
    for state in &profile.boxes {
        if !seen.insert(state.id.as_str()) && !duplicate_ids.contains(&state.id) {
            duplicate_ids.push(state.id.clone());
        }
    }
    let unknown_colors = profile
        .boxes
        .iter()
        .filter(|b| !is_valid_color(&b.background_color))
        .map(|b| (b.id.clone(), b.background_color.clone()))
        .collect();
    ValidationReport {
        dangling: profile.dangling_connections().into_iter().cloned().collect(),
        duplicate_ids,
        unknown_colors,
    }
}

// =============================================================
// normalize
// =============================================================

/// What `normalize` changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub dropped_connections: usize,
    pub recolored_boxes: usize,
}

/// Round-trip through the document model, then rewrite opaque colors as `#rrggbb`.
///
/// Dangling connections are dropped and repeated box ids collapse to one box,
/// exactly as loading the profile in the editor would. Colors without a
/// `#rrggbb` form (unknown notations, translucent `rgba()`) are kept verbatim.
pub fn normalize(profile: Profile) -> (Profile, NormalizeStats) {
    let (doc, report) = profile.into_doc();
    let mut normalized = Profile::from_doc(&doc);
    let mut recolored = 0;
    for state in &mut normalized.boxes {
        let Some(hex) = canonical_hex(&state.background_color) else {
            continue;
        };
        if hex != state.background_color {
            state.background_color = hex;
            recolored += 1;
        }
    }
    let stats = NormalizeStats { dropped_connections: report.skipped_connections, recolored_boxes: recolored };
    (normalized, stats)
}
