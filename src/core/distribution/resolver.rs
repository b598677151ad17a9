use tracing::{debug, warn};

use crate::core::distribution::manifest::{Distribution, DistributionDiscord, Server};
use crate::core::distribution::server::ResolvedServer;
use crate::core::error::DistroResult;

/// The fully resolved distribution graph. Immutable once constructed: the
/// main-flag normalization below completes before any caller can observe it.
#[derive(Debug, Clone)]
pub struct ResolvedDistribution {
    version: String,
    rss: Option<String>,
    discord: Option<DistributionDiscord>,
    servers: Vec<ResolvedServer>,
    main_server_index: usize,
}

impl ResolvedDistribution {
    /// Resolve a full manifest document, consuming it. Any error aborts the
    /// whole resolution; no partial graph is returned.
    pub fn resolve(mut raw: Distribution) -> DistroResult<Self> {
        let main_server_index = resolve_main_server_index(&mut raw.servers);
        let servers = raw
            .servers
            .into_iter()
            .map(ResolvedServer::resolve)
            .collect::<DistroResult<Vec<_>>>()?;

        debug!(
            "Resolved {} servers from distribution manifest v{}",
            servers.len(),
            raw.version
        );

        Ok(Self {
            version: raw.version,
            rss: raw.rss,
            discord: raw.discord,
            servers,
            main_server_index,
        })
    }

    /// Manifest schema version.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rss(&self) -> Option<&str> {
        self.rss.as_deref()
    }

    pub fn discord(&self) -> Option<&DistributionDiscord> {
        self.discord.as_ref()
    }

    /// All servers in manifest order.
    pub fn servers(&self) -> &[ResolvedServer] {
        &self.servers
    }

    /// The server a client connects to by default. `None` only when the
    /// manifest declared zero servers.
    pub fn main_server(&self) -> Option<&ResolvedServer> {
        self.servers.get(self.main_server_index)
    }

    /// First server whose declared id matches.
    pub fn server_by_id(&self, id: &str) -> Option<&ResolvedServer> {
        self.servers.iter().find(|s| s.id() == id)
    }
}

/// Normalize the main flags so exactly one server carries `mainServer = true`
/// (first declared wins, later duplicates are forced false) and return its
/// index. With no flagged server the first one is promoted. Zero servers
/// leaves index 0 pointing at nothing.
fn resolve_main_server_index(servers: &mut [Server]) -> usize {
    if servers.is_empty() {
        warn!("Distribution manifest declares no servers; main server lookup will find nothing");
        return 0;
    }

    let mut main_index = None;
    for (index, server) in servers.iter_mut().enumerate() {
        match main_index {
            None if server.main_server => main_index = Some(index),
            None => {}
            Some(_) => server.main_server = false,
        }
    }

    match main_index {
        Some(index) => index,
        None => {
            servers[0].main_server = true;
            0
        }
    }
}
