//! Address resolution for the map-portal automation: which portal serves a
//! plot and which address fragments to search for. No browser is involved.

pub mod plot_address;
pub mod portals;

pub use plot_address::*;
pub use portals::*;
