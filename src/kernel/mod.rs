//! Headless application core: document session, text widget, metrics and services.

pub mod editor;
pub mod effect;
pub mod services;
pub mod session;
pub mod stats;

pub use editor::{EditorDispatch, EditorState};
pub use effect::Effect;
pub use session::{DocumentSession, SaveOutcome, SessionPorts};
pub use stats::DocumentStats;
