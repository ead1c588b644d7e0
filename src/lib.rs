//! Stellar Wallet Connect
//!
//! A connection manager for externally injected Stellar signing-key
//! providers (Freighter and friends). It provides:
//! - A compiled-in catalog of supported wallet providers
//! - A provider-agnostic `connect` operation returning the signing
//!   address and the configured network
//! - Address shortening for display
//!
//! # Security Model
//!
//! - This crate never holds key material; signing keys live inside the
//!   external provider and are reachable only through its approval gate
//! - The provider surface is confined to the five-method
//!   [`provider::WalletCapability`] trait
//! - Connection results are never cached; every connect is a fresh
//!   round trip to the provider

pub mod catalog;
pub mod config;
pub mod manager;
pub mod provider;

mod error;

// Re-export commonly used types
pub use catalog::{supported_wallets, ProviderDescriptor, ProviderKind};
pub use config::{Config, SimulatorSettings};
pub use error::{Error, Result};
pub use manager::{shorten_address, ConnectionResult, WalletManager};
