pub mod manifest;
pub mod module;
pub mod resolver;
pub mod server;

pub use manifest::{
    Artifact, Distribution, DistributionDiscord, JavaOptions, JavaRam, Module, ModuleType,
    Required, Server, ServerDiscord,
};
pub use module::{ResolvedModule, ResolvedRequired, REQUIRED_DEFAULT};
pub use resolver::ResolvedDistribution;
pub use server::{ResolvedServer, DEFAULT_PORT};
