//! Compiled-in catalog of supported wallet providers
//!
//! The catalog is a fixed table defined at compile time; availability
//! reflects which integrations are actually wired up, not which wallets
//! exist in the ecosystem.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported wallet provider kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Freighter,
    Albedo,
    Xbull,
    Ledger,
}

impl ProviderKind {
    /// Lowercase identifier used on the CLI and in config files
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Freighter => "freighter",
            ProviderKind::Albedo => "albedo",
            ProviderKind::Xbull => "xbull",
            ProviderKind::Ledger => "ledger",
        }
    }

    /// Human-facing wallet name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Freighter => "Freighter",
            ProviderKind::Albedo => "Albedo",
            ProviderKind::Xbull => "xBull",
            ProviderKind::Ledger => "Ledger",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "freighter" => Ok(ProviderKind::Freighter),
            "albedo" => Ok(ProviderKind::Albedo),
            "xbull" => Ok(ProviderKind::Xbull),
            "ledger" => Ok(ProviderKind::Ledger),
            _ => Err(Error::Unsupported(s.to_string())),
        }
    }
}

/// One entry in the provider catalog
#[derive(Debug, Clone, Serialize)]
pub struct ProviderDescriptor {
    pub kind: ProviderKind,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Whether this integration is wired up
    pub available: bool,
}

/// The full catalog, in display order
pub const SUPPORTED_WALLETS: &[ProviderDescriptor] = &[
    ProviderDescriptor {
        kind: ProviderKind::Freighter,
        display_name: "Freighter",
        description: "Chrome Extension",
        available: true,
    },
    ProviderDescriptor {
        kind: ProviderKind::Albedo,
        display_name: "Albedo",
        description: "Web-based Wallet",
        available: false,
    },
    ProviderDescriptor {
        kind: ProviderKind::Xbull,
        display_name: "xBull",
        description: "Multi-platform Wallet",
        available: false,
    },
    ProviderDescriptor {
        kind: ProviderKind::Ledger,
        display_name: "Ledger",
        description: "Hardware Wallet",
        available: false,
    },
];

/// Get the provider catalog
pub fn supported_wallets() -> &'static [ProviderDescriptor] {
    SUPPORTED_WALLETS
}

/// Look up the descriptor for a provider kind
pub fn descriptor(kind: ProviderKind) -> &'static ProviderDescriptor {
    SUPPORTED_WALLETS
        .iter()
        .find(|d| d.kind == kind)
        .expect("every ProviderKind has a catalog entry")
}
