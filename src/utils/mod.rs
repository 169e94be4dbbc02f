//! Utility modules for OpsDesk access control
//!
//! - **error**: Error type and result alias
//! - **logging**: Tracing subscriber installation

pub mod error;
pub mod logging;

pub use error::{AccessError, Result};
