use crate::core::distribution::manifest::Server;
use crate::core::distribution::module::ResolvedModule;
use crate::core::error::{DistroError, DistroResult};

/// Port assumed when a server address omits one.
pub const DEFAULT_PORT: u16 = 25565;

/// One resolved server: parsed address plus the resolved module list.
#[derive(Debug, Clone)]
pub struct ResolvedServer {
    raw: Server,
    hostname: String,
    port: u16,
    modules: Vec<ResolvedModule>,
}

impl ResolvedServer {
    /// Resolve one server declaration.
    pub fn resolve(raw: Server) -> DistroResult<Self> {
        let (hostname, port) = parse_address(&raw.address, &raw.id)?;
        let modules = raw
            .modules
            .iter()
            .map(|m| ResolvedModule::resolve(m.clone(), &raw.id))
            .collect::<DistroResult<Vec<_>>>()?;

        Ok(Self {
            raw,
            hostname,
            port,
            modules,
        })
    }

    /// The declaration this server was resolved from.
    pub fn raw(&self) -> &Server {
        &self.raw
    }

    pub fn id(&self) -> &str {
        &self.raw.id
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolved top-level modules in declaration order.
    pub fn modules(&self) -> &[ResolvedModule] {
        &self.modules
    }
}

/// Split `host[:port]`. SRV record lookup would slot in here if it is ever
/// needed; callers must not assume it happens.
fn parse_address(address: &str, server_id: &str) -> DistroResult<(String, u16)> {
    match address.split_once(':') {
        Some((hostname, port)) => {
            let port = port
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or_else(|| DistroError::MalformedAddress {
                    server_id: server_id.to_string(),
                })?;
            Ok((hostname.to_string(), port))
        }
        None => Ok((address.to_string(), DEFAULT_PORT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn server_from_json(json: &str) -> Server {
        serde_json::from_str(json).unwrap()
    }

    fn server_with_address(address: &str) -> Server {
        server_from_json(&format!(
            r#"{{
                "id": "Example-1.12.2",
                "name": "Example Server",
                "description": "The example server.",
                "icon": "https://files.example.com/icon.png",
                "version": "1.0.0",
                "address": "{address}",
                "minecraftVersion": "1.12.2",
                "mainServer": true,
                "autoconnect": true,
                "modules": []
            }}"#
        ))
    }

    #[test]
    fn address_without_port_uses_default() {
        let resolved = ResolvedServer::resolve(server_with_address("play.example.com")).unwrap();
        assert_eq!(resolved.hostname(), "play.example.com");
        assert_eq!(resolved.port(), DEFAULT_PORT);
    }

    #[test]
    fn address_with_port_is_split() {
        let resolved = ResolvedServer::resolve(server_with_address("play.example.com:1234")).unwrap();
        assert_eq!(resolved.hostname(), "play.example.com");
        assert_eq!(resolved.port(), 1234);
    }

    #[test]
    fn non_integer_port_is_malformed() {
        let err = ResolvedServer::resolve(server_with_address("play.example.com:notanumber"))
            .unwrap_err();
        match err {
            DistroError::MalformedAddress { server_id } => {
                assert_eq!(server_id, "Example-1.12.2");
            }
            other => panic!("expected MalformedAddress, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_port_is_malformed() {
        assert!(ResolvedServer::resolve(server_with_address("play.example.com:0")).is_err());
        assert!(ResolvedServer::resolve(server_with_address("play.example.com:70000")).is_err());
    }

    #[test]
    fn modules_resolve_in_declaration_order() {
        let server = server_from_json(
            r#"{
                "id": "Example-1.12.2",
                "name": "Example Server",
                "description": "The example server.",
                "icon": "https://files.example.com/icon.png",
                "version": "1.0.0",
                "address": "play.example.com",
                "minecraftVersion": "1.12.2",
                "mainServer": false,
                "autoconnect": false,
                "modules": [
                    {
                        "id": "com.example:alpha:1.0",
                        "name": "Alpha",
                        "type": "Library",
                        "artifact": { "size": 1, "url": "https://files.example.com/alpha.jar" }
                    },
                    {
                        "id": "com.example:beta:2.0",
                        "name": "Beta",
                        "type": "ForgeMod",
                        "artifact": { "size": 1, "url": "https://files.example.com/beta.jar" }
                    }
                ]
            }"#,
        );
        let resolved = ResolvedServer::resolve(server).unwrap();
        assert_eq!(resolved.modules().len(), 2);
        assert_eq!(resolved.modules()[0].raw().name, "Alpha");
        assert_eq!(resolved.modules()[1].raw().name, "Beta");
        // Module paths inherit this server's id for instance-area files.
        assert_eq!(
            resolved.modules()[0].local_path(),
            Path::new("common/libraries/com/example/alpha/1.0/alpha-1.0.jar")
        );
    }

    #[test]
    fn module_error_aborts_server_resolution() {
        let server = server_from_json(
            r#"{
                "id": "Example-1.12.2",
                "name": "Example Server",
                "description": "The example server.",
                "icon": "https://files.example.com/icon.png",
                "version": "1.0.0",
                "address": "play.example.com",
                "minecraftVersion": "1.12.2",
                "mainServer": false,
                "autoconnect": false,
                "modules": [
                    {
                        "id": "notamavenid",
                        "name": "Broken",
                        "type": "Library",
                        "artifact": { "size": 1, "url": "https://files.example.com/broken.jar" }
                    }
                ]
            }"#,
        );
        assert!(matches!(
            ResolvedServer::resolve(server),
            Err(DistroError::MissingMavenIdentity { .. })
        ));
    }
}
