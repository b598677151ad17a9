// ─── Distribution Manifest ───
// Raw wire schema for the distribution manifest document. Field names are the
// contract with the component that fetches and caches the JSON; semantic
// validation (coordinate syntax, address syntax, type-driven requirements)
// happens during resolution, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::DistroResult;

/// Top-level distribution manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub version: String,
    #[serde(default)]
    pub rss: Option<String>,
    #[serde(default)]
    pub discord: Option<DistributionDiscord>,
    pub servers: Vec<Server>,
}

impl Distribution {
    /// Deserialize a manifest document from its JSON representation.
    pub fn from_json(raw: &str) -> DistroResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Launcher-wide Discord rich presence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionDiscord {
    pub client_id: String,
    pub small_image_text: String,
    pub small_image_key: String,
}

/// One deployable server target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub version: String,
    /// `host` or `host:port`.
    pub address: String,
    pub minecraft_version: String,
    #[serde(default)]
    pub discord: Option<ServerDiscord>,
    pub main_server: bool,
    pub autoconnect: bool,
    #[serde(default)]
    pub java_options: Option<JavaOptions>,
    pub modules: Vec<Module>,
}

/// Per-server Discord rich presence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDiscord {
    pub short_id: String,
    pub large_image_text: String,
    pub large_image_key: String,
}

/// Java requirements advertised by a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaOptions {
    /// Semver range of supported Java versions, e.g. `">=17.x"`.
    #[serde(default)]
    pub supported: Option<String>,
    #[serde(default)]
    pub suggested_major: Option<u32>,
    #[serde(default)]
    pub ram: Option<JavaRam>,
}

/// RAM guidance in gigabytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JavaRam {
    pub recommended: f64,
    pub minimum: f64,
}

/// One installable unit required by a server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Whether the artifact joins the game classpath (library-like types).
    #[serde(default)]
    pub classpath: Option<bool>,
    #[serde(default)]
    pub required: Option<Required>,
    pub artifact: Artifact,
    #[serde(default)]
    pub sub_modules: Option<Vec<Module>>,
}

/// Module kinds — strongly typed, no magic strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ModuleType {
    Library,
    Forge,
    ForgeHosted,
    LiteLoader,
    ForgeMod,
    LiteMod,
    File,
    VersionManifest,
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleType::Library => write!(f, "Library"),
            ModuleType::Forge => write!(f, "Forge"),
            ModuleType::ForgeHosted => write!(f, "ForgeHosted"),
            ModuleType::LiteLoader => write!(f, "LiteLoader"),
            ModuleType::ForgeMod => write!(f, "ForgeMod"),
            ModuleType::LiteMod => write!(f, "LiteMod"),
            ModuleType::File => write!(f, "File"),
            ModuleType::VersionManifest => write!(f, "VersionManifest"),
        }
    }
}

/// Download descriptor for a module's artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub size: u64,
    #[serde(rename = "MD5", default)]
    pub md5: Option<String>,
    pub url: String,
    /// Optional explicit location relative to the module's area root.
    #[serde(default)]
    pub path: Option<String>,
}

/// Raw required descriptor; both fields are independently optional.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Required {
    #[serde(default)]
    pub value: Option<bool>,
    #[serde(default)]
    pub def: Option<bool>,
}
