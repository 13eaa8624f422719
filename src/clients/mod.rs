//! Typed handles over the resource actors.
//!
//! `UserClient` is a thin wrapper. `ItemClient` resolves prices before
//! creating, and `OrderClient` validates references before creating.

#[macro_use]
mod macros;

mod item_client;
mod order_client;
mod user_client;

pub use item_client::*;
pub use order_client::*;
pub use user_client::*;
