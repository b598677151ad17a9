// ─── Directory Layout ───
// Shared area layout below the launcher data root. Derivation is pure: the
// resolver emits relative locations and the embedding application joins them
// onto its configured data directory.

use std::path::PathBuf;

/// Area for artifacts shared by every server.
pub const COMMON_DIR: &str = "common";
/// Area holding per-server working directories.
pub const INSTANCES_DIR: &str = "instances";

const VERSIONS_DIR: &str = "versions";
const LIBRARIES_DIR: &str = "libraries";
const MOD_STORE_DIR: &str = "modstore";

/// `common/versions` — version manifest JSON files.
pub fn versions_dir() -> PathBuf {
    PathBuf::from(COMMON_DIR).join(VERSIONS_DIR)
}

/// `common/libraries` — maven-addressed libraries and loader artifacts.
pub fn libraries_dir() -> PathBuf {
    PathBuf::from(COMMON_DIR).join(LIBRARIES_DIR)
}

/// `common/modstore` — maven-addressed mods shared across servers.
pub fn mod_store_dir() -> PathBuf {
    PathBuf::from(COMMON_DIR).join(MOD_STORE_DIR)
}

/// `instances/<serverId>` — files owned by one server's installation.
pub fn server_instance_dir(server_id: &str) -> PathBuf {
    PathBuf::from(INSTANCES_DIR).join(server_id)
}
