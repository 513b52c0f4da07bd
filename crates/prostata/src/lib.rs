//! Top-level facade crate for prostata.
//!
//! Re-exports the registry core and the host tooling so users can depend on a single crate.

pub mod core {
    pub use prostata_core::*;
}

pub mod report {
    pub use prostata_report::*;
}

pub use prostata_core::{ProstataError, Registry, Result};
