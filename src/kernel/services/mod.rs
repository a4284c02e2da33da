//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the session and the editor.
//! - `adapters`: OS specific implementations (filesystem, clipboard, settings).

pub mod adapters;
pub mod ports;
