//! `depot-auth` — staff authorization registry.
//!
//! Authorization here is plain set membership: an actor id is either granted a
//! role or it is not. No expiry, no hierarchy, no IO.

pub mod registry;
pub mod roles;

pub use registry::{AuthorizationRegistry, AuthzError};
pub use roles::Role;
