//! Business profile use cases.

mod acquire_location;
mod submit_details;

pub use acquire_location::AcquireLocation;
pub use submit_details::SubmitBusinessDetails;
