//! Ports: the seams between orchestration and external collaborators.

pub mod contact_store;
pub mod profile_source;

pub use contact_store::ContactStore;
pub use profile_source::ProfileSource;
