//! Session container shared by the onboarding use cases.

mod context;
mod operation;

pub use context::SessionContext;
pub(crate) use operation::run_operation;
