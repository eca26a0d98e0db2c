//! Monster kind catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use doom_core::{Bestiary, KindId, MonsterKind, Weapon};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One `[[kinds]]` entry of `bestiary.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindSpec {
    pub name: String,
    /// Doubles as the kind's identity; ranks must be unique.
    pub rank: u8,
    pub weapon: Weapon,
    pub ammunition: u32,
    pub exposure: u32,
    /// Name of the protecting kind.
    #[serde(default)]
    pub protector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BestiaryFile {
    kinds: Vec<KindSpec>,
}

/// Loader for the monster kind catalog from TOML files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses and validates a catalog. Protectors may name kinds declared
    /// later in the file.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let file: BestiaryFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary TOML: {}", e))?;
        Self::resolve(file.kinds)
    }

    pub fn resolve(specs: Vec<KindSpec>) -> LoadResult<Bestiary> {
        let ids: BTreeMap<&str, KindId> = specs
            .iter()
            .map(|spec| (spec.name.as_str(), KindId(spec.rank)))
            .collect();

        let mut entries = Vec::with_capacity(specs.len());
        for spec in &specs {
            let mut kind = MonsterKind::new(
                KindId(spec.rank),
                spec.weapon,
                spec.ammunition,
                spec.exposure,
            );
            if let Some(protector) = &spec.protector {
                let id = ids.get(protector.as_str()).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Kind '{}' is protected by unknown kind '{}'",
                        spec.name,
                        protector
                    )
                })?;
                kind = kind.protected_by(*id);
            }
            entries.push((spec.name.clone(), kind));
        }

        let bestiary = Bestiary::from_entries(entries)
            .map_err(|e| anyhow::anyhow!("Invalid bestiary: {}", e))?;
        tracing::debug!(target: "doom_content::bestiary", kinds = bestiary.len(), "bestiary loaded");
        Ok(bestiary)
    }
}
