// ─── Distro Core ───
// Resolution core for the launcher's distribution manifest.
//
// Architecture:
//   core/
//     distribution/ — Manifest wire schema + resolved server/module graph
//     maven.rs      — Maven coordinate parsing and path normalization
//     paths.rs      — Directory layout shared with download/launch collaborators
//     error.rs      — Central error type

pub mod distribution;
pub mod error;
pub mod maven;
pub mod paths;
