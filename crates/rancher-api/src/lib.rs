// rancher-api: Async Rust client for the Rancher container-orchestration REST API

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

mod containers;
mod hosts;
mod registration;
mod services;
mod stacks;
mod volumes;

pub use client::{ApiRequest, RancherClient};
pub use config::ClientConfig;
pub use error::Error;
pub use models::{Collection, RegistrationToken};
pub use transport::{TlsMode, TransportConfig};

pub use reqwest::Method;
