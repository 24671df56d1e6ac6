//! Government server adapter implementing the remote-authority ports.

use tracing::warn;

use crate::application::ports::{
    CatalogPort, CateringCompany, DistanceOracle, IndividualDetails, OrderingPort, RemoteError,
};
use crate::domain::food_box::{FoodBox, FoodBoxPayload};
use crate::domain::shared::{Chi, Postcode};

use super::api_types::{FoodBoxDto, parse_caterer_descriptor};
use super::config::AuthorityConfig;
use super::error::AuthorityError;
use super::http_client::AuthorityHttpClient;

/// Acknowledgment body for successful edit and cancel requests.
const ACK: &str = "True";
/// Registration response for a CHI the server already knows.
const ALREADY_REGISTERED: &str = "already registered";
/// Registration response when no CHI was supplied.
const NO_CHI: &str = "must specify CHI";
/// Placement response when the server refuses the order.
const PLACE_ORDER_FAILURE: &str = "must provide individual_id and catering_id. The \
                                   individual and the catering must be registered before placing an order";

/// Adapter for the government server, implementing [`CatalogPort`],
/// [`DistanceOracle`], and [`OrderingPort`].
#[derive(Debug, Clone)]
pub struct AuthorityClient {
    http: AuthorityHttpClient,
}

impl AuthorityClient {
    /// Create an adapter from config.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &AuthorityConfig) -> Result<Self, AuthorityError> {
        Ok(Self {
            http: AuthorityHttpClient::new(config)?,
        })
    }
}

impl CatalogPort for AuthorityClient {
    fn fetch_all_food_boxes(&self) -> Result<Vec<FoodBox>, RemoteError> {
        let body = self
            .http
            .get_text("/showFoodBox", &[("orderOption", "catering")])
            .map_err(RemoteError::from)?;
        let dtos: Vec<FoodBoxDto> =
            serde_json::from_str(&body).map_err(|err| RemoteError::Malformed {
                detail: err.to_string(),
            })?;
        dtos.into_iter()
            .map(|dto| dto.into_domain().map_err(RemoteError::from))
            .collect()
    }
}

impl DistanceOracle for AuthorityClient {
    fn distance(&self, from: &Postcode, to: &Postcode) -> Result<f32, RemoteError> {
        let body = self
            .http
            .get_text(
                "/distance",
                &[("postcode1", from.as_str()), ("postcode2", to.as_str())],
            )
            .map_err(RemoteError::from)?;
        body.trim().parse().map_err(|_| RemoteError::Malformed {
            detail: format!("distance response '{body}' is not a number"),
        })
    }
}

impl OrderingPort for AuthorityClient {
    fn register_individual(&self, chi: &Chi) -> Result<IndividualDetails, RemoteError> {
        let body = self
            .http
            .get_text("/registerShieldingIndividual", &[("CHI", chi.as_str())])
            .map_err(RemoteError::from)?;
        if body == ALREADY_REGISTERED || body == NO_CHI {
            return Err(RemoteError::Rejected { reason: body });
        }
        let details: Vec<Option<String>> =
            serde_json::from_str(&body).map_err(|err| RemoteError::Malformed {
                detail: err.to_string(),
            })?;
        let mut fields = details.into_iter().flatten();
        match (fields.next(), fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(postcode), Some(name), Some(surname), Some(phone_number), None) => {
                Ok(IndividualDetails {
                    postcode,
                    name,
                    surname,
                    phone_number,
                })
            }
            _ => Err(RemoteError::Malformed {
                detail: "registration response did not contain exactly four details".into(),
            }),
        }
    }

    fn list_caterers(&self) -> Result<Vec<CateringCompany>, RemoteError> {
        let body = self
            .http
            .get_text("/getCaterers", &[])
            .map_err(RemoteError::from)?;
        let descriptors: Vec<Option<String>> =
            serde_json::from_str(&body).map_err(|err| RemoteError::Malformed {
                detail: err.to_string(),
            })?;
        // Blank or unparsable entries are dropped rather than failing the
        // whole listing.
        Ok(descriptors
            .into_iter()
            .flatten()
            .filter(|descriptor| !descriptor.is_empty())
            .filter_map(|descriptor| match parse_caterer_descriptor(&descriptor) {
                Ok(company) => Some(company),
                Err(err) => {
                    warn!(%descriptor, error = %err, "skipping caterer descriptor");
                    None
                }
            })
            .collect())
    }

    fn place_order(
        &self,
        chi: &Chi,
        company: &CateringCompany,
        food_box: &FoodBoxPayload,
    ) -> Result<u32, RemoteError> {
        let body = self
            .http
            .post_json(
                "/placeOrder",
                &[
                    ("individual_id", chi.as_str()),
                    ("catering_business_name", company.name.as_str()),
                    ("catering_postcode", company.postcode.as_str()),
                ],
                food_box,
            )
            .map_err(RemoteError::from)?;
        if body == PLACE_ORDER_FAILURE {
            return Err(RemoteError::Rejected { reason: body });
        }
        body.trim().parse().map_err(|_| RemoteError::Malformed {
            detail: format!("order number response '{body}' is not a number"),
        })
    }

    fn edit_order(
        &self,
        order_number: u32,
        food_box: &FoodBoxPayload,
    ) -> Result<(), RemoteError> {
        let body = self
            .http
            .post_json(
                "/editOrder",
                &[("order_id", order_number.to_string().as_str())],
                food_box,
            )
            .map_err(RemoteError::from)?;
        if body == ACK {
            Ok(())
        } else {
            Err(RemoteError::Rejected { reason: body })
        }
    }

    fn cancel_order(&self, order_number: u32) -> Result<(), RemoteError> {
        let body = self
            .http
            .get_text(
                "/cancelOrder",
                &[("order_id", order_number.to_string().as_str())],
            )
            .map_err(RemoteError::from)?;
        if body == ACK {
            Ok(())
        } else {
            Err(RemoteError::Rejected { reason: body })
        }
    }

    fn order_status(&self, order_number: u32) -> Result<String, RemoteError> {
        let body = self
            .http
            .get_text(
                "/requestStatus",
                &[("order_id", order_number.to_string().as_str())],
            )
            .map_err(RemoteError::from)?;
        Ok(body.trim().to_owned())
    }
}
