mod fixed_location;

pub use fixed_location::FixedLocationProvider;
