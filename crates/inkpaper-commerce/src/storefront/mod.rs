//! Storefront module.
//!
//! The view controller: a single owner of view, filter and cart state that
//! accepts [`Intent`]s and hands out [`Snapshot`]s.

mod controller;
mod intent;
mod snapshot;
mod view;

pub use controller::Storefront;
pub use intent::Intent;
pub use snapshot::{CartSnapshot, Snapshot};
pub use view::{FooterLink, SupportTopic, View, ViewKind};
