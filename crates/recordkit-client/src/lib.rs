//! recordkit-client — the concurrent batched record-storage client.
//!
//! # Overview
//!
//! [`RecordClient::get`] is the single batched entry point: it splits a
//! request-operation list into chunks, dispatches the chunks concurrently
//! over the configured transport, and returns results in request order,
//! failing the whole call on any chunk failure or request/response count
//! mismatch. Around the engine this crate carries:
//!
//! - [`session`] — account settings → resolved session context
//! - [`bootstrap`] — session + device identity → ready-to-use client
//! - [`ops`] — operation builders (zone retrieve, record retrieve)
//! - [`asset`] — decoded record → typed asset mapping
//!
//! # Quick start
//! ```rust,no_run
//! use recordkit_client::bootstrap::{client_for_session, DeviceContext};
//! use recordkit_client::ops::zones;
//! use recordkit_client::session::{AccountSession, AccountSettings};
//!
//! # async fn run() -> Result<(), recordkit_core::ClientError> {
//! let settings = AccountSettings::from_json(&std::fs::read("settings.json").unwrap())?;
//! let session = AccountSession::resolve(&settings, "https://records.example.com/api/client")?;
//! let device = DeviceContext {
//!     container: "com.example.backup".into(),
//!     bundle: "com.example.backupd".into(),
//!     device_identifier: "6ba7b810-9dad-11d1-80b4-00c04fd430c8".into(),
//!     device_hardware_id: "hw-0001".into(),
//! };
//! let client = client_for_session(&session, &device)?;
//! let _zones = zones::retrieve(&client, &["_defaultZone"]).await?;
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod bootstrap;
pub mod client;
pub mod ops;
pub mod session;

pub use asset::Asset;
pub use bootstrap::{client_for_session, DeviceContext};
pub use client::{ClientConfig, RecordClient};
pub use session::{AccountSession, AccountSettings};
