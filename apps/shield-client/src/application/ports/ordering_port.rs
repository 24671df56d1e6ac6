//! Ordering Port (Driven Port)
//!
//! Registration, catering-company lookup, and the order placement / edit /
//! cancel / status-query submissions.

use super::RemoteError;
use crate::domain::food_box::FoodBoxPayload;
use crate::domain::shared::{Chi, Postcode};

/// A catering company as listed by the remote authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CateringCompany {
    /// The authority's identifier for the company.
    pub id: String,
    /// Business name.
    pub name: String,
    /// The company's location.
    pub postcode: Postcode,
}

/// Identity details returned by a successful registration.
///
/// Fields are raw wire strings; the session validates and normalizes them
/// before storing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualDetails {
    /// The individual's postcode.
    pub postcode: String,
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Contact phone number.
    pub phone_number: String,
}

/// Submission interface for everything order-related.
#[cfg_attr(test, mockall::automock)]
pub trait OrderingPort {
    /// Register a shielding individual and return their identity details.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Rejected`] if the authority refuses the CHI
    /// (e.g. already registered elsewhere), or a transport/decode error.
    fn register_individual(&self, chi: &Chi) -> Result<IndividualDetails, RemoteError>;

    /// List the catering companies currently registered with the
    /// authority.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or an uninterpretable
    /// response.
    fn list_caterers(&self) -> Result<Vec<CateringCompany>, RemoteError>;

    /// Place an order for `food_box` with `company`, returning the order
    /// number assigned by the authority.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the authority refuses the placement or
    /// the response cannot be interpreted.
    fn place_order(
        &self,
        chi: &Chi,
        company: &CateringCompany,
        food_box: &FoodBoxPayload,
    ) -> Result<u32, RemoteError>;

    /// Propagate the current local state of an order's food box.
    ///
    /// The authority independently enforces that the order's status still
    /// permits edits and that quantities were not increased.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Rejected`] if the authority refuses the
    /// edit, or a transport error.
    fn edit_order(&self, order_number: u32, food_box: &FoodBoxPayload)
    -> Result<(), RemoteError>;

    /// Ask the authority to cancel an order.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Rejected`] if cancellation is no longer
    /// legal, or a transport error.
    fn cancel_order(&self, order_number: u32) -> Result<(), RemoteError>;

    /// Query the authority for an order's current status code.
    ///
    /// The raw code is returned untouched; mapping it to a status is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure.
    fn order_status(&self, order_number: u32) -> Result<String, RemoteError>;
}
