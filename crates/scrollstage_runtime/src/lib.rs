//! Scrollstage Runtime
//!
//! Lifecycle integration for the scrollstage timeline scheduler: the
//! [`ScrollRegion`] that a host UI mounts around its animated content, and
//! the [`SiteRegistration`] guards that keep per-site registration and
//! removal in lockstep with component mount and unmount.

pub mod region;

pub use region::{ScrollRegion, SiteRegistration};
