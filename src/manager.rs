//! Wallet connection manager
//!
//! Single entry point for obtaining a signing address and network
//! identifier from whichever provider the caller selects. Provider
//! error messages and the approval flow are confined to this module.
//!
//! The manager is a plain value constructed once by the application and
//! passed to whoever needs it. It caches nothing; every successful
//! connect reflects a fresh round trip to the provider.

use crate::catalog::ProviderKind;
use crate::provider::WalletCapability;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Addresses shorter than this are displayed unshortened
const MIN_SHORTEN_LEN: usize = 12;

/// Outcome of a successful connection attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionResult {
    /// Signing address, in the provider's own format
    pub address: String,
    /// Identifier of the network the provider is configured for
    pub network: String,
}

/// Provider-agnostic wallet connection manager
pub struct WalletManager {
    capability: Box<dyn WalletCapability>,
}

impl WalletManager {
    /// Create a manager backed by the given provider capability
    pub fn new(capability: Box<dyn WalletCapability>) -> Self {
        Self { capability }
    }

    /// Whether the selected provider is installed and reachable
    ///
    /// Fail-closed: a probe that errors is reported as unavailable, the
    /// same as a probe that answers `false`. Kinds without a wired
    /// integration are unavailable without touching the provider.
    pub async fn is_provider_available(&self, kind: ProviderKind) -> bool {
        if kind != ProviderKind::Freighter {
            return false;
        }
        self.capability.is_connected().await.unwrap_or(false)
    }

    /// Connect to the selected provider
    ///
    /// May suspend while the provider's own UI waits for user consent.
    /// Repeated calls with approval already granted return the current
    /// address and network; nothing is cached across calls.
    pub async fn connect(&self, kind: ProviderKind) -> Result<ConnectionResult> {
        match kind {
            ProviderKind::Freighter => self.connect_freighter().await,
            other => Err(Error::NotImplemented(other.display_name())),
        }
    }

    /// Connect to a provider named by its lowercase identifier
    ///
    /// Names outside the catalog fail with [`Error::Unsupported`].
    pub async fn connect_named(&self, name: &str) -> Result<ConnectionResult> {
        let kind: ProviderKind = name.parse()?;
        self.connect(kind).await
    }

    async fn connect_freighter(&self) -> Result<ConnectionResult> {
        if !self.is_provider_available(ProviderKind::Freighter).await {
            return Err(Error::NotAvailable(
                ProviderKind::Freighter.display_name(),
            ));
        }

        let allowed = self.capability.is_allowed().await.map_err(rejected)?;
        if !allowed {
            self.capability.request_access().await.map_err(rejected)?;
        }

        let address = self.capability.address().await.map_err(rejected)?;
        let network = self.capability.network().await.map_err(rejected)?;

        tracing::debug!(address = %shorten_address(&address), network = %network, "wallet connected");

        Ok(ConnectionResult { address, network })
    }
}

/// Wrap a provider failure, preserving the provider's own message
fn rejected(err: Error) -> Error {
    match err {
        e @ Error::ProviderRejected(_) => e,
        e => Error::ProviderRejected(e.to_string()),
    }
}

/// Shorten an address for display
///
/// Pure and infallible: short strings pass through unchanged, anything
/// else becomes first four chars, an ellipsis, last four chars.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < MIN_SHORTEN_LEN {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SimulatedWallet;
    use std::sync::Arc;

    const TEST_ADDRESS: &str = "GAIH3ULLFQ4DGSECF2AR555KZ4KNDGEKN4AFI4SU2M7B43MGK3QJZNSR";

    fn manager_over(wallet: Arc<SimulatedWallet>) -> WalletManager {
        WalletManager::new(Box::new(wallet))
    }

    #[test]
    fn short_addresses_pass_through() {
        assert_eq!(shorten_address(""), "");
        assert_eq!(shorten_address("GABC"), "GABC");
        assert_eq!(shorten_address("GABCDEFGHIJ"), "GABCDEFGHIJ"); // 11 chars
    }

    #[test]
    fn long_addresses_are_shortened() {
        assert_eq!(shorten_address("GABCDEFGHIJK"), "GABC...HIJK"); // exactly 12
        assert_eq!(shorten_address(TEST_ADDRESS), "GAIH...ZNSR");

        // Output length does not grow with the input
        let long = "G".repeat(200);
        assert_eq!(shorten_address(&long).len(), 11);
    }

    #[tokio::test]
    async fn stub_kinds_fail_without_touching_provider() {
        let wallet = Arc::new(SimulatedWallet::installed(TEST_ADDRESS, "TESTNET"));
        let manager = manager_over(wallet.clone());

        for kind in [ProviderKind::Albedo, ProviderKind::Xbull, ProviderKind::Ledger] {
            let err = manager.connect(kind).await.unwrap_err();
            assert!(matches!(err, Error::NotImplemented(_)), "{kind}");
        }
        assert_eq!(wallet.calls(), Default::default());
    }

    #[tokio::test]
    async fn unknown_kind_is_unsupported() {
        let wallet = Arc::new(SimulatedWallet::installed(TEST_ADDRESS, "TESTNET"));
        let manager = manager_over(wallet.clone());

        let err = manager.connect_named("unknown-kind").await.unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
        assert_eq!(wallet.calls(), Default::default());
    }

    #[tokio::test]
    async fn connect_named_reaches_freighter() {
        let wallet = Arc::new(SimulatedWallet::installed(TEST_ADDRESS, "TESTNET"));
        let manager = manager_over(wallet);

        let result = manager.connect_named("freighter").await.unwrap();
        assert_eq!(result.address, TEST_ADDRESS);
    }

    #[tokio::test]
    async fn absent_extension_fails_not_available() {
        let wallet = Arc::new(SimulatedWallet::absent());
        let manager = manager_over(wallet.clone());

        let err = manager.connect(ProviderKind::Freighter).await.unwrap_err();
        assert!(matches!(err, Error::NotAvailable(_)));

        let calls = wallet.calls();
        assert_eq!(calls.is_connected, 1);
        assert_eq!(calls.is_allowed, 0);
        assert_eq!(calls.request_access, 0);
        assert_eq!(calls.address, 0);
        assert_eq!(calls.network, 0);
    }

    #[tokio::test]
    async fn probe_errors_are_treated_as_not_installed() {
        let wallet =
            Arc::new(SimulatedWallet::installed(TEST_ADDRESS, "TESTNET").with_probe_failure());
        let manager = manager_over(wallet.clone());

        assert!(!manager.is_provider_available(ProviderKind::Freighter).await);

        let err = manager.connect(ProviderKind::Freighter).await.unwrap_err();
        assert!(matches!(err, Error::NotAvailable(_)));
        assert_eq!(wallet.calls().is_allowed, 0);
    }

    #[tokio::test]
    async fn availability_of_stub_kinds_skips_the_probe() {
        let wallet = Arc::new(SimulatedWallet::installed(TEST_ADDRESS, "TESTNET"));
        let manager = manager_over(wallet.clone());

        assert!(!manager.is_provider_available(ProviderKind::Albedo).await);
        assert_eq!(wallet.calls().is_connected, 0);
    }

    #[tokio::test]
    async fn already_approved_connect_fetches_once() {
        let wallet = Arc::new(SimulatedWallet::installed(TEST_ADDRESS, "TESTNET"));
        let manager = manager_over(wallet.clone());

        let result = manager.connect(ProviderKind::Freighter).await.unwrap();
        assert_eq!(result.address, TEST_ADDRESS);
        assert_eq!(result.network, "TESTNET");

        let calls = wallet.calls();
        assert_eq!(calls.request_access, 0);
        assert_eq!(calls.address, 1);
        assert_eq!(calls.network, 1);
    }

    #[tokio::test]
    async fn pending_approval_is_requested_before_fetch() {
        let wallet = Arc::new(
            SimulatedWallet::installed(TEST_ADDRESS, "TESTNET").with_approval_pending(),
        );
        let manager = manager_over(wallet.clone());

        let result = manager.connect(ProviderKind::Freighter).await.unwrap();
        assert_eq!(result.address, TEST_ADDRESS);

        let calls = wallet.calls();
        assert_eq!(calls.is_allowed, 1);
        assert_eq!(calls.request_access, 1);
        assert_eq!(calls.address, 1);
        assert_eq!(calls.network, 1);
    }

    #[tokio::test]
    async fn declined_approval_skips_fetch() {
        let wallet = Arc::new(
            SimulatedWallet::installed(TEST_ADDRESS, "TESTNET").with_declined_access(),
        );
        let manager = manager_over(wallet.clone());

        let err = manager.connect(ProviderKind::Freighter).await.unwrap_err();
        assert!(matches!(err, Error::ProviderRejected(_)));

        let calls = wallet.calls();
        assert_eq!(calls.request_access, 1);
        assert_eq!(calls.address, 0);
        assert_eq!(calls.network, 0);
    }

    #[tokio::test]
    async fn fetch_failures_surface_the_provider_message() {
        let wallet = Arc::new(
            SimulatedWallet::installed(TEST_ADDRESS, "TESTNET").with_failing_fetch(),
        );
        let manager = manager_over(wallet);

        let err = manager.connect(ProviderKind::Freighter).await.unwrap_err();
        match err {
            Error::ProviderRejected(message) => assert_eq!(message, "internal wallet error"),
            other => panic!("expected ProviderRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repeated_connects_return_the_same_key() {
        let wallet = Arc::new(SimulatedWallet::installed(TEST_ADDRESS, "TESTNET"));
        let manager = manager_over(wallet.clone());

        let first = manager.connect(ProviderKind::Freighter).await.unwrap();
        let second = manager.connect(ProviderKind::Freighter).await.unwrap();
        assert_eq!(first.address, second.address);
        assert_eq!(first.network, second.network);

        // Two connects mean two full round trips, nothing cached
        let calls = wallet.calls();
        assert_eq!(calls.address, 2);
        assert_eq!(calls.network, 2);
    }
}
