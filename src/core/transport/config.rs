//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
///
/// Only STDIO is supported; the enum leaves room for additional transports
/// without changing the config surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[default]
    Stdio,
}

impl TransportConfig {
    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Load transport config from environment variables.
    ///
    /// `MCP_TRANSPORT` is read for forward compatibility; any value other
    /// than "stdio" falls back to STDIO with a warning.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            "" | "stdio" => Self::Stdio,
            other => {
                tracing::warn!("Unsupported transport '{}', falling back to STDIO", other);
                Self::Stdio
            }
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdio() {
        assert!(matches!(TransportConfig::default(), TransportConfig::Stdio));
    }

    #[test]
    fn test_description() {
        assert_eq!(
            TransportConfig::stdio().description(),
            "STDIO (standard MCP mode)"
        );
    }
}
