//! Simulated signing-key provider
//!
//! Stands in for the browser extension in tests and demo runs. Behavior
//! is driven by [`SimulatorSettings`]; every primitive call is counted
//! so tests can assert exactly which provider operations a flow touched.

use crate::config::SimulatorSettings;
use crate::provider::WalletCapability;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Per-primitive call counts, as observed by the simulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub is_connected: usize,
    pub is_allowed: usize,
    pub request_access: usize,
    pub address: usize,
    pub network: usize,
}

/// In-memory wallet provider
pub struct SimulatedWallet {
    installed: bool,
    probe_error: bool,
    decline_access: bool,
    fail_fetch: bool,
    allowed: AtomicBool,
    address: String,
    network: String,

    is_connected_calls: AtomicUsize,
    is_allowed_calls: AtomicUsize,
    request_access_calls: AtomicUsize,
    address_calls: AtomicUsize,
    network_calls: AtomicUsize,
}

impl SimulatedWallet {
    pub fn new(settings: SimulatorSettings) -> Self {
        Self {
            installed: settings.installed,
            probe_error: false,
            decline_access: settings.decline_access,
            fail_fetch: false,
            allowed: AtomicBool::new(settings.allowed),
            address: settings.address,
            network: settings.network,
            is_connected_calls: AtomicUsize::new(0),
            is_allowed_calls: AtomicUsize::new(0),
            request_access_calls: AtomicUsize::new(0),
            address_calls: AtomicUsize::new(0),
            network_calls: AtomicUsize::new(0),
        }
    }

    /// An installed, already-approved wallet holding the given key
    pub fn installed(address: &str, network: &str) -> Self {
        Self::new(SimulatorSettings {
            installed: true,
            allowed: true,
            decline_access: false,
            address: address.to_string(),
            network: network.to_string(),
        })
    }

    /// A wallet whose extension is not installed
    pub fn absent() -> Self {
        let mut settings = SimulatorSettings::default();
        settings.installed = false;
        Self::new(settings)
    }

    /// Approval has not been granted yet; `request_access` will grant it
    pub fn with_approval_pending(mut self) -> Self {
        self.allowed = AtomicBool::new(false);
        self
    }

    /// The user declines the approval prompt
    pub fn with_declined_access(mut self) -> Self {
        self.allowed = AtomicBool::new(false);
        self.decline_access = true;
        self
    }

    /// The liveness probe itself errors instead of answering
    pub fn with_probe_failure(mut self) -> Self {
        self.probe_error = true;
        self
    }

    /// Address/network fetches fail inside the provider
    pub fn with_failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Snapshot of how often each primitive has been invoked
    pub fn calls(&self) -> CallCounts {
        CallCounts {
            is_connected: self.is_connected_calls.load(Ordering::SeqCst),
            is_allowed: self.is_allowed_calls.load(Ordering::SeqCst),
            request_access: self.request_access_calls.load(Ordering::SeqCst),
            address: self.address_calls.load(Ordering::SeqCst),
            network: self.network_calls.load(Ordering::SeqCst),
        }
    }
}

#[async_trait]
impl WalletCapability for SimulatedWallet {
    async fn is_connected(&self) -> Result<bool> {
        self.is_connected_calls.fetch_add(1, Ordering::SeqCst);
        if self.probe_error {
            return Err(Error::ProviderRejected(
                "extension did not respond".to_string(),
            ));
        }
        Ok(self.installed)
    }

    async fn is_allowed(&self) -> Result<bool> {
        self.is_allowed_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.allowed.load(Ordering::SeqCst))
    }

    async fn request_access(&self) -> Result<()> {
        self.request_access_calls.fetch_add(1, Ordering::SeqCst);
        if self.decline_access {
            return Err(Error::ProviderRejected(
                "User declined access".to_string(),
            ));
        }
        self.allowed.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn address(&self) -> Result<String> {
        self.address_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(Error::ProviderRejected(
                "internal wallet error".to_string(),
            ));
        }
        Ok(self.address.clone())
    }

    async fn network(&self) -> Result<String> {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(Error::ProviderRejected(
                "internal wallet error".to_string(),
            ));
        }
        Ok(self.network.clone())
    }
}
