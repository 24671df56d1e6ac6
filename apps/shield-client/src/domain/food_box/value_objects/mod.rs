//! Food Box Value Objects

mod dietary_preference;

pub use dietary_preference::DietaryPreference;
