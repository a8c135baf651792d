//! Load evolution path tables from TOML files
//!
//! Path tables look like:
//!
//! ```toml
//! [[paths]]
//! from = "BasicChild"
//! to = "GoodTeen"
//! priority = 2
//! requirements = [
//!     { type = "min_age", value = 5 },
//!     { type = "min_effort", value = 3 },
//!     { type = "max_care_mistakes", value = 3 },
//! ]
//! ```
//!
//! Special conditions use `{ type = "special", value = "perfect_care" }`
//! or `"night"`.

use crate::core::error::{MonError, Result};
use crate::evolution::paths::{EvolutionPath, EvolutionTable, Requirement, SpecialCondition};
use std::fs;
use std::path::Path;

/// Load a path table from a TOML file
pub fn load_paths(path: &Path) -> Result<EvolutionTable> {
    let content = fs::read_to_string(path)?;
    parse_paths_toml(&content)
}

/// Parse a path table from TOML text
pub fn parse_paths_toml(content: &str) -> Result<EvolutionTable> {
    let toml: toml::Value = content.parse().map_err(MonError::TomlError)?;

    let mut table = EvolutionTable::default();
    if let Some(paths) = toml.get("paths").and_then(|v| v.as_array()) {
        for value in paths {
            table.push(parse_path(value)?);
        }
    }
    Ok(table)
}

fn parse_path(value: &toml::Value) -> Result<EvolutionPath> {
    let from_species = value
        .get("from")
        .and_then(|v| v.as_str())
        .ok_or_else(|| MonError::InvalidPath("path missing 'from'".into()))?
        .to_string();

    let to_species = value
        .get("to")
        .and_then(|v| v.as_str())
        .ok_or_else(|| MonError::InvalidPath(format!("{}: path missing 'to'", from_species)))?
        .to_string();

    let priority = value
        .get("priority")
        .and_then(|v| v.as_integer())
        .unwrap_or(1) as i32;

    let mut requirements = Vec::new();
    if let Some(reqs) = value.get("requirements").and_then(|v| v.as_array()) {
        for req in reqs {
            requirements.push(parse_requirement(req, &from_species)?);
        }
    }

    Ok(EvolutionPath {
        from_species,
        to_species,
        requirements,
        priority,
    })
}

fn parse_requirement(value: &toml::Value, species: &str) -> Result<Requirement> {
    let kind = value
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| MonError::InvalidPath(format!("{}: requirement missing 'type'", species)))?;

    let numeric = |field: &toml::Value| -> Result<u32> {
        field
            .get("value")
            .and_then(|v| v.as_integer())
            .filter(|&n| n >= 0)
            .map(|n| n as u32)
            .ok_or_else(|| {
                MonError::InvalidPath(format!(
                    "{}: requirement '{}' needs a non-negative integer value",
                    species, kind
                ))
            })
    };

    match kind {
        "min_age" => Ok(Requirement::MinAge(numeric(value)?)),
        "max_age" => Ok(Requirement::MaxAge(numeric(value)?)),
        "min_effort" => Ok(Requirement::MinEffort(numeric(value)?.min(255) as u8)),
        "max_care_mistakes" => Ok(Requirement::MaxCareMistakes(numeric(value)?)),
        "min_bp" => Ok(Requirement::MinBp(numeric(value)?)),
        "special" => {
            let name = value.get("value").and_then(|v| v.as_str()).ok_or_else(|| {
                MonError::InvalidPath(format!("{}: special requirement needs a string value", species))
            })?;
            let condition = match name {
                "perfect_care" => SpecialCondition::PerfectCare,
                "night" => SpecialCondition::NightEvolution,
                other => {
                    return Err(MonError::InvalidPath(format!(
                        "{}: unknown special condition '{}'",
                        species, other
                    )))
                }
            };
            Ok(Requirement::Special(condition))
        }
        other => Err(MonError::InvalidPath(format!(
            "{}: unknown requirement type '{}'",
            species, other
        ))),
    }
}
