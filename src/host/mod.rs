//! Collaborator interfaces: what the engine needs from the editor and debugger.
//!
//! The engine never talks to an editor or a debug adapter directly. Hosts
//! implement [`DocumentHost`] for the open document and [`DebugSession`] for
//! the paused session; both are consumed only through these traits.

mod document;
mod error;
mod session;

pub use document::{DocumentHost, TextDocument, extension_of};
pub use error::{EvaluateError, HostError};
pub use session::{DebugSession, EvaluateContext, EvaluateRequest, EvaluateResponse};
