//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the dispatch core.
//! - `adapters`: OS specific implementations (IO/paths/output).

pub mod adapters;
pub mod ports;
