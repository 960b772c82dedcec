//! Configuration schema definitions for readymate.
//!
//! The config file is a JSON object keyed by software name:
//!
//! ```json
//! {
//!   "git": { "installer": "brew", "cmd": "install git" },
//!   "docker": {
//!     "macos": { "support": true, "installer": "brew", "cmd": "install --cask docker" },
//!     "linux": { "support": true, "installer": "apt-get", "cmd": "install -y docker.io", "root": true },
//!     "windows": { "support": false }
//!   }
//! }
//! ```

use crate::platform::Platform;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Root configuration: required software in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadyMateConfig {
    entries: Vec<SoftwareEntry>,
}

/// One named software requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareEntry {
    /// Command name probed on PATH (e.g., "git").
    pub name: String,
    /// How to install it when missing.
    pub descriptor: RequirementDescriptor,
}

impl ReadyMateConfig {
    /// Build a config from entries already in the desired order.
    ///
    /// A later entry with the same name replaces the earlier one in place,
    /// matching how a JSON object treats duplicate keys.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, RequirementDescriptor)>,
    {
        let mut config = Self::default();
        for (name, descriptor) in entries {
            config.insert(name, descriptor);
        }
        config
    }

    /// Insert or replace an entry, keeping first-seen position.
    pub fn insert(&mut self, name: String, descriptor: RequirementDescriptor) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            existing.descriptor = descriptor;
        } else {
            self.entries.push(SoftwareEntry { name, descriptor });
        }
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[SoftwareEntry] {
        &self.entries
    }

    /// Software names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Look up a descriptor by software name.
    pub fn get(&self, name: &str) -> Option<&RequirementDescriptor> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How to satisfy one software requirement.
///
/// `installer`/`cmd` form the default record used when no per-OS rule
/// matches. Every other key holding an object is an OS identifier mapping
/// to an [`OsRule`]; keys holding anything else (notes, descriptions) are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequirementDescriptor {
    /// Default package manager command.
    #[serde(default)]
    pub installer: Option<String>,

    /// Default argument string passed to the installer.
    #[serde(default)]
    pub cmd: Option<String>,

    /// Per-OS overrides keyed by identifier (macos, windows, linux, ...).
    #[serde(flatten, deserialize_with = "os_rules")]
    pub platforms: HashMap<String, OsRule>,
}

/// Keep only object-valued keys as OS rules.
fn os_rules<'de, D>(deserializer: D) -> Result<HashMap<String, OsRule>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;

    let mut rules = HashMap::new();
    for (key, value) in raw {
        if !value.is_object() {
            tracing::debug!("Ignoring non-rule key '{}'", key);
            continue;
        }
        let rule = OsRule::deserialize(value)
            .map_err(|e| <D::Error as serde::de::Error>::custom(format!("rule '{}': {}", key, e)))?;
        rules.insert(key, rule);
    }
    Ok(rules)
}

impl RequirementDescriptor {
    /// Descriptor with only a default installer record.
    pub fn with_default(installer: &str, cmd: &str) -> Self {
        Self {
            installer: Some(installer.to_string()),
            cmd: Some(cmd.to_string()),
            platforms: HashMap::new(),
        }
    }

    /// Add a per-OS rule.
    pub fn with_rule(mut self, os: &str, rule: OsRule) -> Self {
        self.platforms.insert(os.to_string(), rule);
        self
    }

    /// Rule for the given platform, if one is configured.
    pub fn rule_for(&self, platform: &Platform) -> Option<&OsRule> {
        self.platforms.get(platform.as_str())
    }

    /// Default installer, ignoring blank values.
    pub fn default_installer(&self) -> Option<&str> {
        self.installer
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Default argument string (empty when unset).
    pub fn default_cmd(&self) -> &str {
        self.cmd.as_deref().unwrap_or("")
    }
}

/// Per-OS installation rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OsRule {
    /// Whether auto-installation is possible on this OS. Absent means no.
    #[serde(default)]
    pub support: bool,

    /// Package manager command to check for and invoke.
    #[serde(default)]
    pub installer: String,

    /// Argument string passed to the installer.
    #[serde(default)]
    pub cmd: String,

    /// Run the installer with elevated privileges (Linux only).
    #[serde(default)]
    pub root: bool,
}

impl OsRule {
    /// A supported rule.
    pub fn supported(installer: &str, cmd: &str) -> Self {
        Self {
            support: true,
            installer: installer.to_string(),
            cmd: cmd.to_string(),
            root: false,
        }
    }

    /// A rule marking the OS as unsupported.
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// Require elevated privileges.
    pub fn as_root(mut self) -> Self {
        self.root = true;
        self
    }
}
