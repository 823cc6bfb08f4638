//! Execute handlers for the token bridge relayer contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `admin` - Ownership, assistant, pause, and upgrade
//! - `config` - Counterpart and token registry, fees, and swap settings
//! - `outgoing` - Transfers sent with relay
//! - `incoming` - Redemption of relayed transfers

mod admin;
mod config;
mod incoming;
mod outgoing;

pub use admin::*;
pub use config::*;
pub use incoming::*;
pub use outgoing::*;
