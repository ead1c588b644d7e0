//! Capability seam to an external signing-key provider
//!
//! The real Freighter extension exposes a wide, dynamically shaped API.
//! Everything this crate needs from it is confined to the five
//! primitives below; an adapter reconciling a concrete provider to this
//! trait is the only place provider-specific shapes appear.

pub mod simulator;

pub use simulator::SimulatedWallet;

use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Narrow interface to an injected signing-key provider
///
/// All methods are single-shot calls with no retries or timeouts; the
/// caller's environment governs how long it waits on user consent.
#[async_trait]
pub trait WalletCapability: Send + Sync {
    /// Liveness probe: is the provider present and reachable?
    async fn is_connected(&self) -> Result<bool>;

    /// Does the caller already hold approval to read the address?
    async fn is_allowed(&self) -> Result<bool>;

    /// Request approval to read the address
    ///
    /// May suspend indefinitely while the provider's own UI waits for
    /// user consent. Fails if the user declines or the provider errors.
    async fn request_access(&self) -> Result<()>;

    /// Fetch the signing address (opaque, provider-defined format)
    async fn address(&self) -> Result<String>;

    /// Fetch the identifier of the currently configured network
    async fn network(&self) -> Result<String>;
}

// A shared handle to a capability is itself a capability, so one
// provider instance can back both a manager and test assertions.
#[async_trait]
impl<T: WalletCapability + ?Sized> WalletCapability for Arc<T> {
    async fn is_connected(&self) -> Result<bool> {
        (**self).is_connected().await
    }

    async fn is_allowed(&self) -> Result<bool> {
        (**self).is_allowed().await
    }

    async fn request_access(&self) -> Result<()> {
        (**self).request_access().await
    }

    async fn address(&self) -> Result<String> {
        (**self).address().await
    }

    async fn network(&self) -> Result<String> {
        (**self).network().await
    }
}
