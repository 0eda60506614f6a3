//! Route-level pages composed from section components.

pub mod experience;
pub mod home;
