//! Contact Sync Contracts
//!
//! Wire shapes exchanged with the upstream people and contacts endpoints.

mod contact;
mod person;

pub use contact::*;
pub use person::*;
