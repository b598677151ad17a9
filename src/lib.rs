//! Distribution manifest resolution core for a Minecraft launcher backend.
//!
//! Takes the deserialized distribution manifest — servers and the modules
//! each one requires — and resolves it into an immutable, queryable object
//! graph: parsed maven identities, required pairs, canonical local paths,
//! and a single main server. Fetching the manifest, downloading artifacts
//! and launching the game stay with the surrounding launcher components.

pub mod core;

pub use crate::core::distribution::{
    Artifact, Distribution, Module, ModuleType, Required, ResolvedDistribution, ResolvedModule,
    ResolvedRequired, ResolvedServer, Server,
};
pub use crate::core::error::{DistroError, DistroResult};
pub use crate::core::maven::MavenArtifact;
