use std::path::{Path, PathBuf};

use crate::core::distribution::manifest::{Module, ModuleType, Required};
use crate::core::error::{DistroError, DistroResult};
use crate::core::maven::MavenArtifact;
use crate::core::paths;

/// Derived required pair. `value` is whether the module is currently
/// required; `def` is the manifest author's baseline default, kept separate
/// so optional-component toggling can always restore the declared default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRequired {
    pub value: bool,
    pub def: bool,
}

/// Pair used whenever the manifest omits a field.
pub const REQUIRED_DEFAULT: ResolvedRequired = ResolvedRequired {
    value: true,
    def: true,
};

impl Default for ResolvedRequired {
    fn default() -> Self {
        REQUIRED_DEFAULT
    }
}

/// One resolved module: maven identity (when the type carries one), required
/// pair, canonical local path, and resolved submodules.
#[derive(Debug, Clone)]
pub struct ResolvedModule {
    raw: Module,
    maven: Option<MavenArtifact>,
    required: ResolvedRequired,
    local_path: PathBuf,
    sub_modules: Vec<ResolvedModule>,
}

impl ResolvedModule {
    /// Resolve one module declaration for the server that owns it.
    /// Submodules inherit the server id for path derivation.
    pub fn resolve(raw: Module, server_id: &str) -> DistroResult<Self> {
        let maven = resolve_maven_components(&raw)?;
        let required = resolve_required(raw.required);
        let local_path = resolve_local_path(&raw, maven.as_ref(), server_id);

        let sub_modules = match &raw.sub_modules {
            Some(declared) => declared
                .iter()
                .map(|m| ResolvedModule::resolve(m.clone(), server_id))
                .collect::<DistroResult<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            raw,
            maven,
            required,
            local_path,
            sub_modules,
        })
    }

    /// The declaration this module was resolved from.
    pub fn raw(&self) -> &Module {
        &self.raw
    }

    pub fn has_maven_components(&self) -> bool {
        self.maven.is_some()
    }

    /// Parsed maven coordinate. Absent for version manifests and for files
    /// that declare an explicit artifact path.
    pub fn maven_components(&self) -> Option<&MavenArtifact> {
        self.maven.as_ref()
    }

    /// `group:artifact:version[:classifier][@extension]`
    pub fn maven_identifier(&self) -> Option<String> {
        self.maven.as_ref().map(MavenArtifact::identifier)
    }

    /// `group:artifact:version[:classifier]`
    pub fn extensionless_maven_identifier(&self) -> Option<String> {
        self.maven
            .as_ref()
            .map(MavenArtifact::extensionless_identifier)
    }

    /// `group:artifact`
    pub fn versionless_maven_identifier(&self) -> Option<String> {
        self.maven
            .as_ref()
            .map(MavenArtifact::versionless_identifier)
    }

    pub fn required(&self) -> ResolvedRequired {
        self.required
    }

    /// Canonical location relative to the launcher data root.
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn has_sub_modules(&self) -> bool {
        !self.sub_modules.is_empty()
    }

    /// Resolved submodules in declaration order.
    pub fn sub_modules(&self) -> &[ResolvedModule] {
        &self.sub_modules
    }
}

fn resolve_maven_components(raw: &Module) -> DistroResult<Option<MavenArtifact>> {
    // Version manifests never carry a maven identifier.
    if raw.module_type == ModuleType::VersionManifest {
        return Ok(None);
    }
    // Files need no maven identifier if they declare an explicit path.
    if raw.module_type == ModuleType::File && raw.artifact.path.is_some() {
        return Ok(None);
    }

    match MavenArtifact::parse(&raw.id) {
        Ok(artifact) => Ok(Some(artifact)),
        Err(_) if raw.module_type == ModuleType::File => Err(DistroError::AmbiguousFileModule {
            name: raw.name.clone(),
            id: raw.id.clone(),
            kind: raw.module_type,
        }),
        Err(_) => Err(DistroError::MissingMavenIdentity {
            name: raw.name.clone(),
            id: raw.id.clone(),
            kind: raw.module_type,
        }),
    }
}

fn resolve_required(declared: Option<Required>) -> ResolvedRequired {
    match declared {
        None => REQUIRED_DEFAULT,
        Some(required) => ResolvedRequired {
            value: required.value.unwrap_or(true),
            def: required.def.unwrap_or(true),
        },
    }
}

/// Pure derivation: equal declarations always yield equal paths.
fn resolve_local_path(raw: &Module, maven: Option<&MavenArtifact>, server_id: &str) -> PathBuf {
    match raw.module_type {
        // Version manifests have a pre-determined location keyed by their id.
        ModuleType::VersionManifest => paths::versions_dir()
            .join(&raw.id)
            .join(format!("{}.json", raw.id)),
        ModuleType::Library
        | ModuleType::Forge
        | ModuleType::ForgeHosted
        | ModuleType::LiteLoader => paths::libraries_dir().join(relative_path(raw, maven)),
        ModuleType::ForgeMod | ModuleType::LiteMod => {
            paths::mod_store_dir().join(relative_path(raw, maven))
        }
        ModuleType::File => paths::server_instance_dir(server_id).join(relative_path(raw, maven)),
    }
}

/// A declared explicit path wins; otherwise the normalized maven path.
fn relative_path(raw: &Module, maven: Option<&MavenArtifact>) -> PathBuf {
    match (&raw.artifact.path, maven) {
        (Some(explicit), _) => PathBuf::from(explicit),
        (None, Some(artifact)) => artifact.local_path(),
        // Maven resolution has already rejected declarations with neither an
        // explicit path nor a parsable coordinate.
        (None, None) => PathBuf::from(&raw.id),
    }
}
