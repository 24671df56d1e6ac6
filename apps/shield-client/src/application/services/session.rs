//! Shielding Individual Session
//!
//! The Order Lifecycle Manager for one individual: owns the candidate food
//! box, the orders placed in this session, the catalog cache, and the
//! registration state, and orchestrates the remote collaborators when
//! placing, editing, cancelling, and refreshing orders.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::application::ports::{
    CatalogPort, CateringCompany, DistanceOracle, OrderingPort, RemoteError,
};
use crate::application::services::catalog_cache::CatalogCache;
use crate::application::services::nearest_company::NearestCompanyResolver;
use crate::domain::food_box::{DietaryPreference, FoodBox, FoodBoxError};
use crate::domain::order::{CateringCompanyOrder, OrderError, OrderStatus};
use crate::domain::shared::{Chi, Postcode};

/// Minimum elapsed time between two successful placements: one week.
const MIN_SECONDS_BETWEEN_ORDERS: i64 = 7 * 24 * 60 * 60;

/// Failure kinds surfaced by session operations.
///
/// These never cross the public boundary as values: mutating operations
/// collapse them to `bool` and accessors to `Option`, with the kind logged
/// via `tracing` as a diagnostic side channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Malformed input, rejected before any remote call.
    #[error("invalid input: {reason}")]
    Validation {
        /// What was wrong with the input.
        reason: String,
    },

    /// A referenced order, item, or food box does not exist in scope.
    #[error("{what} not found")]
    NotFound {
        /// The entity that was looked up.
        what: String,
    },

    /// A local policy forbids the operation.
    #[error("operation not permitted: {reason}")]
    Policy {
        /// The policy that was violated.
        reason: String,
    },

    /// A remote collaborator failed or refused.
    #[error("remote authority failure: {0}")]
    Remote(#[from] RemoteError),
}

impl From<FoodBoxError> for SessionError {
    fn from(err: FoodBoxError) -> Self {
        match err {
            FoodBoxError::ItemNotFound { item_id } => Self::NotFound {
                what: format!("item {item_id}"),
            },
            FoodBoxError::QuantityAboveCeiling { .. } | FoodBoxError::WouldEmptyBox { .. } => {
                Self::Policy {
                    reason: err.to_string(),
                }
            }
        }
    }
}

impl From<OrderError> for SessionError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::FoodBox(inner) => inner.into(),
            OrderError::InvalidStatusTransition { .. } | OrderError::EditsNotPermitted { .. } => {
                Self::Policy {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// One individual's session against the remote authority.
///
/// Owns all mutable state for the individual and is not internally
/// synchronized; callers needing concurrent access must wrap it in their
/// own lock.
pub struct ShieldingIndividualSession<C, D, O>
where
    C: CatalogPort,
    D: DistanceOracle,
    O: OrderingPort,
{
    catalog_port: Arc<C>,
    distance_oracle: Arc<D>,
    ordering: Arc<O>,
    catalog: CatalogCache,
    orders: HashMap<u32, CateringCompanyOrder>,
    picked: Option<FoodBox>,
    registered: bool,
    chi: Option<Chi>,
    postcode: Option<Postcode>,
    first_name: Option<String>,
    surname: Option<String>,
    phone_number: Option<String>,
}

impl<C, D, O> ShieldingIndividualSession<C, D, O>
where
    C: CatalogPort,
    D: DistanceOracle,
    O: OrderingPort,
{
    /// Create an unregistered session over the given collaborators.
    #[must_use]
    pub fn new(catalog_port: Arc<C>, distance_oracle: Arc<D>, ordering: Arc<O>) -> Self {
        Self {
            catalog_port,
            distance_oracle,
            ordering,
            catalog: CatalogCache::new(),
            orders: HashMap::new(),
            picked: None,
            registered: false,
            chi: None,
            postcode: None,
            first_name: None,
            surname: None,
            phone_number: None,
        }
    }

    // ---------------- Registration ----------------

    /// Register this individual with the remote authority.
    ///
    /// An already-registered session returns `true` without re-registering.
    /// On success the identity details returned by the authority are
    /// stored, with the postcode normalized to underscore form.
    pub fn register_shielding_individual(&mut self, chi: &str) -> bool {
        report("register_shielding_individual", self.try_register(chi))
    }

    fn try_register(&mut self, raw_chi: &str) -> Result<(), SessionError> {
        if self.registered {
            return Ok(());
        }
        let chi = Chi::new(raw_chi).map_err(|err| SessionError::Validation {
            reason: err.to_string(),
        })?;
        let details = self.ordering.register_individual(&chi)?;
        let postcode = Postcode::parse(&details.postcode).map_err(|err| {
            SessionError::Validation {
                reason: err.to_string(),
            }
        })?;
        self.postcode = Some(postcode);
        self.first_name = Some(details.name);
        self.surname = Some(details.surname);
        self.phone_number = Some(details.phone_number);
        self.chi = Some(chi);
        self.registered = true;
        Ok(())
    }

    /// Whether this session has completed registration.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registered
    }

    /// The registered CHI number.
    #[must_use]
    pub fn chi(&self) -> Option<&Chi> {
        if self.registered { self.chi.as_ref() } else { None }
    }

    /// The registered postcode.
    #[must_use]
    pub fn postcode(&self) -> Option<&Postcode> {
        if self.registered {
            self.postcode.as_ref()
        } else {
            None
        }
    }

    /// The registered first name.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        if self.registered {
            self.first_name.as_deref()
        } else {
            None
        }
    }

    /// The registered surname.
    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        if self.registered {
            self.surname.as_deref()
        } else {
            None
        }
    }

    /// The registered phone number.
    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        if self.registered {
            self.phone_number.as_deref()
        } else {
            None
        }
    }

    // ---------------- Picking a food box ----------------

    /// Pick a food box from the catalog as the candidate for the next
    /// order, replacing any prior candidate.
    ///
    /// An id that does not resolve in the catalog clears the candidate and
    /// fails.
    pub fn pick_food_box(&mut self, food_box_id: u32) -> bool {
        report("pick_food_box", self.try_pick_food_box(food_box_id))
    }

    fn try_pick_food_box(&mut self, food_box_id: u32) -> Result<(), SessionError> {
        let id = food_box_id.to_string();
        let resolved = self
            .catalog_boxes()
            .map(|boxes| boxes.iter().find(|b| b.id() == id).cloned());
        match resolved {
            Ok(Some(food_box)) => {
                self.picked = Some(food_box);
                Ok(())
            }
            Ok(None) => {
                self.picked = None;
                Err(SessionError::NotFound {
                    what: format!("food box {food_box_id}"),
                })
            }
            Err(err) => {
                self.picked = None;
                Err(err)
            }
        }
    }

    /// Edit one item's quantity on the candidate food box.
    pub fn change_item_quantity_for_picked_food_box(&mut self, item_id: u32, quantity: u32) -> bool {
        report(
            "change_item_quantity_for_picked_food_box",
            self.try_change_item_quantity(item_id, quantity),
        )
    }

    fn try_change_item_quantity(&mut self, item_id: u32, quantity: u32) -> Result<(), SessionError> {
        self.require_registered()?;
        let picked = self.picked.as_mut().ok_or_else(|| SessionError::NotFound {
            what: "picked food box".into(),
        })?;
        picked.set_quantity_for_item(item_id, quantity, false)?;
        Ok(())
    }

    /// The current candidate food box, if any.
    #[must_use]
    pub fn picked_food_box(&self) -> Option<&FoodBox> {
        if self.registered { self.picked.as_ref() } else { None }
    }

    // ---------------- Placing and mutating orders ----------------

    /// Place an order for the candidate food box with the nearest catering
    /// company.
    ///
    /// Fails without state change if there is no candidate, the throttle
    /// window since the most recent order has not elapsed, no catering
    /// company is reachable, or the remote authority refuses. On success
    /// the new order is tracked and the candidate is cleared.
    pub fn place_order(&mut self, now: DateTime<Utc>) -> bool {
        report("place_order", self.try_place_order(now).map(|_| ()))
    }

    fn try_place_order(&mut self, now: DateTime<Utc>) -> Result<u32, SessionError> {
        self.require_registered()?;
        let payload = self
            .picked
            .as_ref()
            .ok_or_else(|| SessionError::NotFound {
                what: "picked food box".into(),
            })?
            .payload();
        if let Some(last) = self.most_recent_order() {
            let last_time = last.time_ordered();
            if last_time >= now || (now - last_time).num_seconds() < MIN_SECONDS_BETWEEN_ORDERS {
                return Err(SessionError::Policy {
                    reason: "minimum time between orders has not elapsed".into(),
                });
            }
        }
        let chi = self.chi.clone().ok_or_else(|| SessionError::Validation {
            reason: "no registered CHI number".into(),
        })?;
        let origin = self
            .postcode
            .clone()
            .ok_or_else(|| SessionError::Validation {
                reason: "no registered postcode".into(),
            })?;
        let caterers = self.ordering.list_caterers()?;
        let company =
            NearestCompanyResolver::resolve(self.distance_oracle.as_ref(), &origin, &caterers)
                .ok_or_else(|| SessionError::NotFound {
                    what: "reachable catering company".into(),
                })?;
        let number = self.ordering.place_order(&chi, &company, &payload)?;
        let Some(food_box) = self.picked.take() else {
            return Err(SessionError::NotFound {
                what: "picked food box".into(),
            });
        };
        self.orders
            .insert(number, CateringCompanyOrder::new(number, food_box, now));
        Ok(number)
    }

    /// Propagate the current local state of an order's food box to the
    /// remote authority.
    ///
    /// The authority independently enforces that the order's status still
    /// permits edits and that quantities were not increased.
    pub fn edit_order(&self, order_number: u32) -> bool {
        report("edit_order", self.try_edit_order(order_number))
    }

    fn try_edit_order(&self, order_number: u32) -> Result<(), SessionError> {
        self.require_registered()?;
        let order = self
            .orders
            .get(&order_number)
            .ok_or_else(|| unknown_order(order_number))?;
        let payload = order.food_box().payload();
        self.ordering.edit_order(order_number, &payload)?;
        Ok(())
    }

    /// Edit one item's quantity on a placed order's local snapshot.
    ///
    /// Requires the order's mirrored status to still be
    /// [`OrderStatus::Placed`]; quantities can only be held or decreased.
    pub fn set_item_quantity_for_order(
        &mut self,
        item_id: u32,
        order_number: u32,
        quantity: u32,
    ) -> bool {
        report(
            "set_item_quantity_for_order",
            self.try_set_item_quantity_for_order(item_id, order_number, quantity),
        )
    }

    fn try_set_item_quantity_for_order(
        &mut self,
        item_id: u32,
        order_number: u32,
        quantity: u32,
    ) -> Result<(), SessionError> {
        self.require_registered()?;
        let order = self
            .orders
            .get_mut(&order_number)
            .ok_or_else(|| unknown_order(order_number))?;
        order.set_item_quantity(item_id, quantity)?;
        Ok(())
    }

    /// Ask the remote authority to cancel an order, mirroring `Cancelled`
    /// locally on acknowledgment.
    ///
    /// Whether cancellation is still legal is the authority's call; no
    /// local status pre-check is applied.
    pub fn cancel_order(&mut self, order_number: u32) -> bool {
        report("cancel_order", self.try_cancel_order(order_number))
    }

    fn try_cancel_order(&mut self, order_number: u32) -> Result<(), SessionError> {
        self.require_registered()?;
        if !self.orders.contains_key(&order_number) {
            return Err(unknown_order(order_number));
        }
        self.ordering.cancel_order(order_number)?;
        if let Some(order) = self.orders.get_mut(&order_number) {
            order.mark_cancelled();
        }
        Ok(())
    }

    /// Pull an order's status from the remote authority into the local
    /// mirror.
    ///
    /// Fails, leaving the mirror unchanged, if the reported code is
    /// unmapped or the transition is not a legal lifecycle advance.
    pub fn request_order_status(&mut self, order_number: u32) -> bool {
        report(
            "request_order_status",
            self.try_request_order_status(order_number),
        )
    }

    fn try_request_order_status(&mut self, order_number: u32) -> Result<(), SessionError> {
        self.require_registered()?;
        if !self.orders.contains_key(&order_number) {
            return Err(unknown_order(order_number));
        }
        let code = self.ordering.order_status(order_number)?;
        let status = OrderStatus::from_remote_code(&code).ok_or_else(|| {
            SessionError::Remote(RemoteError::Malformed {
                detail: format!("unknown order status code '{code}'"),
            })
        })?;
        let order = self
            .orders
            .get_mut(&order_number)
            .ok_or_else(|| unknown_order(order_number))?;
        order.sync_status(status)?;
        Ok(())
    }

    // ---------------- Order accessors (local state only) ----------------

    /// Numbers of all orders placed in this session.
    #[must_use]
    pub fn order_numbers(&self) -> Vec<u32> {
        if !self.registered {
            return Vec::new();
        }
        self.orders.keys().copied().collect()
    }

    /// The last-synchronized status of an order.
    #[must_use]
    pub fn status_for_order(&self, order_number: u32) -> Option<OrderStatus> {
        if !self.registered {
            return None;
        }
        self.orders
            .get(&order_number)
            .map(CateringCompanyOrder::status)
    }

    /// Item ids in an order's food box.
    #[must_use]
    pub fn item_ids_for_order(&self, order_number: u32) -> Option<Vec<u32>> {
        if !self.registered {
            return None;
        }
        self.orders
            .get(&order_number)
            .map(CateringCompanyOrder::item_ids)
    }

    /// An item's name within an order.
    #[must_use]
    pub fn item_name_for_order(&self, item_id: u32, order_number: u32) -> Option<&str> {
        if !self.registered {
            return None;
        }
        self.orders.get(&order_number)?.item_name(item_id)
    }

    /// An item's locally held quantity within an order.
    #[must_use]
    pub fn item_quantity_for_order(&self, item_id: u32, order_number: u32) -> Option<u32> {
        if !self.registered {
            return None;
        }
        self.orders.get(&order_number)?.item_quantity(item_id)
    }

    // ---------------- Catering companies ----------------

    /// The catering companies currently registered with the authority.
    #[must_use]
    pub fn catering_companies(&self) -> Option<Vec<CateringCompany>> {
        if !self.registered {
            return None;
        }
        match self.ordering.list_caterers() {
            Ok(caterers) => Some(caterers),
            Err(err) => {
                warn!(operation = "catering_companies", error = %err, "operation failed");
                None
            }
        }
    }

    /// Distance between two postcodes, if the oracle can produce a usable
    /// value.
    #[must_use]
    pub fn distance_between(&self, from: &Postcode, to: &Postcode) -> Option<f32> {
        if !self.registered {
            return None;
        }
        match self.distance_oracle.distance(from, to) {
            Ok(d) if d >= 0.0 => Some(d),
            Ok(_) => None,
            Err(err) => {
                warn!(operation = "distance_between", error = %err, "operation failed");
                None
            }
        }
    }

    /// The catering company nearest to this individual, resolved afresh.
    #[must_use]
    pub fn closest_catering_company(&self) -> Option<CateringCompany> {
        if !self.registered {
            return None;
        }
        let origin = self.postcode.as_ref()?;
        let caterers = match self.ordering.list_caterers() {
            Ok(caterers) => caterers,
            Err(err) => {
                warn!(operation = "closest_catering_company", error = %err, "operation failed");
                return None;
            }
        };
        NearestCompanyResolver::resolve(self.distance_oracle.as_ref(), origin, &caterers)
    }

    // ---------------- Catalog reads ----------------

    /// Ids of the catalog boxes satisfying a dietary preference.
    ///
    /// [`DietaryPreference::NoPreference`] matches every box.
    #[must_use]
    pub fn food_box_ids(&mut self, preference: DietaryPreference) -> Option<Vec<String>> {
        self.catalog_read(|boxes| {
            Some(
                boxes
                    .iter()
                    .filter(|b| preference.matches(b.diet()))
                    .map(|b| b.id().to_owned())
                    .collect(),
            )
        })
    }

    /// Number of food boxes in the catalog.
    #[must_use]
    pub fn food_box_count(&mut self) -> Option<usize> {
        self.catalog_read(|boxes| Some(boxes.len()))
    }

    /// Dietary tag of a catalog box.
    #[must_use]
    pub fn dietary_preference_for_food_box(&mut self, food_box_id: u32) -> Option<DietaryPreference> {
        self.catalog_read(|boxes| find_box(boxes, food_box_id).map(FoodBox::diet))
    }

    /// Item ids of a catalog box.
    #[must_use]
    pub fn item_ids_for_food_box(&mut self, food_box_id: u32) -> Option<Vec<u32>> {
        self.catalog_read(|boxes| find_box(boxes, food_box_id).map(FoodBox::item_ids))
    }

    /// Number of items in a catalog box.
    #[must_use]
    pub fn items_count_for_food_box(&mut self, food_box_id: u32) -> Option<usize> {
        self.catalog_read(|boxes| find_box(boxes, food_box_id).map(|b| b.items().len()))
    }

    /// An item's name within a catalog box.
    #[must_use]
    pub fn item_name_for_food_box(&mut self, item_id: u32, food_box_id: u32) -> Option<String> {
        self.catalog_read(|boxes| {
            find_box(boxes, food_box_id)?
                .item_name(item_id)
                .map(ToOwned::to_owned)
        })
    }

    /// An item's catalog quantity within a catalog box.
    #[must_use]
    pub fn item_quantity_for_food_box(&mut self, item_id: u32, food_box_id: u32) -> Option<u32> {
        self.catalog_read(|boxes| find_box(boxes, food_box_id)?.item_quantity(item_id))
    }

    /// Discard the cached catalog and fetch it again.
    pub fn refresh_catalog(&mut self) -> bool {
        let result = match self.require_registered() {
            Ok(()) => self
                .catalog
                .refresh(self.catalog_port.as_ref())
                .map_err(SessionError::from),
            Err(err) => Err(err),
        };
        report("refresh_catalog", result)
    }

    // ---------------- Test and debug surface ----------------

    /// Directly set the registration flag. Test hook.
    pub fn set_registered(&mut self, registered: bool) {
        self.registered = registered;
    }

    /// Directly set the CHI number. Test hook.
    pub fn set_chi(&mut self, chi: Chi) {
        self.chi = Some(chi);
    }

    /// Directly set the postcode. Test hook.
    pub fn set_postcode(&mut self, postcode: Postcode) {
        self.postcode = Some(postcode);
    }

    /// Directly set the first name. Test hook.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = Some(first_name.into());
    }

    /// Directly set the surname. Test hook.
    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = Some(surname.into());
    }

    /// Directly set the phone number. Test hook.
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = Some(phone_number.into());
    }

    /// Directly replace the candidate food box. Test hook.
    pub fn set_picked_food_box(&mut self, food_box: Option<FoodBox>) {
        self.picked = food_box;
    }

    /// Insert an order directly into the session. Test hook.
    pub fn add_order(&mut self, order: CateringCompanyOrder) {
        self.orders.insert(order.number(), order);
    }

    /// Move the most recent order's placement time backward to simulate
    /// cooldown expiry. Test hook; placement times never move forward.
    pub fn move_most_recent_order_back_by_days(&mut self, days: u32) {
        let number = self.most_recent_order().map(CateringCompanyOrder::number);
        if let Some(number) = number {
            if let Some(order) = self.orders.get_mut(&number) {
                order.rewind_time_ordered(days);
            }
        }
    }

    // ---------------- Internal helpers ----------------

    fn require_registered(&self) -> Result<(), SessionError> {
        if self.registered {
            Ok(())
        } else {
            Err(SessionError::Policy {
                reason: "individual is not registered".into(),
            })
        }
    }

    fn most_recent_order(&self) -> Option<&CateringCompanyOrder> {
        self.orders
            .values()
            .max_by_key(|order| order.time_ordered())
    }

    fn catalog_boxes(&mut self) -> Result<&[FoodBox], SessionError> {
        self.require_registered()?;
        Ok(self.catalog.boxes(self.catalog_port.as_ref())?)
    }

    fn catalog_read<T>(&mut self, read: impl FnOnce(&[FoodBox]) -> Option<T>) -> Option<T> {
        match self.catalog_boxes() {
            Ok(boxes) => read(boxes),
            Err(err) => {
                warn!(error = %err, "catalog read failed");
                None
            }
        }
    }
}

fn find_box(boxes: &[FoodBox], food_box_id: u32) -> Option<&FoodBox> {
    let id = food_box_id.to_string();
    boxes.iter().find(|b| b.id() == id)
}

fn unknown_order(order_number: u32) -> SessionError {
    SessionError::NotFound {
        what: format!("order {order_number}"),
    }
}

fn report(operation: &'static str, result: Result<(), SessionError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(operation, error = %err, "operation failed");
            false
        }
    }
}
