//! Boss pet profile table
//!
//! Maps boss names to the droprate and threshold of their pet, for normal
//! and hard mode. A default table is compiled in from
//! `share/profiles.json`; a custom table can be loaded from disk.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::pity::DropProfile;

const BUNDLED: &str = include_str!("../../../share/profiles.json");

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pet drop parameters for one boss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetProfile {
    /// Boss name as players type it
    pub name: String,
    /// Pet name, used in replies for enrage bosses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet: Option<String>,
    /// Normal mode profile; `None` when the boss has no known pet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<DropProfile>,
    /// Hard mode profile, or the above-100% enrage profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardmode: Option<DropProfile>,
    /// Enrage boss: the pet chance always uses the enraged profile
    #[serde(default)]
    pub escalation: bool,
}

impl PetProfile {
    pub fn pet_name(&self) -> &str {
        self.pet.as_deref().unwrap_or("the pet")
    }
}

/// Table file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileTable {
    pub version: u32,
    pub profiles: Vec<PetProfile>,
}

impl ProfileTable {
    /// The compiled-in table
    pub fn bundled() -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(BUNDLED)?)
    }

    /// Load a table from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let table: ProfileTable = serde_json::from_str(&content)?;
        debug!(
            path = %path.as_ref().display(),
            profiles = table.profiles.len(),
            "loaded profile table"
        );
        Ok(table)
    }

    /// Find a boss by name
    ///
    /// Tries an exact match, then case-insensitive, then ignoring spaces,
    /// underscores and dashes.
    pub fn find(&self, name: &str) -> Option<&PetProfile> {
        if let Some(profile) = self.profiles.iter().find(|p| p.name == name) {
            return Some(profile);
        }

        let lower = name.to_lowercase();
        if let Some(profile) = self
            .profiles
            .iter()
            .find(|p| p.name.to_lowercase() == lower)
        {
            return Some(profile);
        }

        let normalized = normalize(name);
        self.profiles.iter().find(|p| normalize(&p.name) == normalized)
    }

    /// All boss names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable_by_key(|n| n.to_lowercase());
        names
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
