//! Component-owned state holders.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal` by the component that creates them.
//! Nothing here is provided as context; each instance owns its copy.

pub mod contact;
