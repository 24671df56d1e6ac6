//! Wire types for the government server's API.

use serde::Deserialize;

use super::error::AuthorityError;
use crate::application::ports::CateringCompany;
use crate::domain::food_box::{DietaryPreference, FoodBox, FoodBoxItem};
use crate::domain::shared::Postcode;

/// A food box as served by `/showFoodBox`.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodBoxDto {
    /// Stringified catalog id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Dietary tag wire string.
    #[serde(default)]
    pub diet: String,
    /// Line items.
    pub contents: Vec<FoodBoxItemDto>,
}

/// A line item inside a [`FoodBoxDto`].
#[derive(Debug, Clone, Deserialize)]
pub struct FoodBoxItemDto {
    /// Item id, unique within the box.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Catalog maximum quantity.
    pub quantity: u32,
}

impl FoodBoxDto {
    /// Convert the wire shape into the domain aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError::UnexpectedResponse`] for an unknown
    /// dietary tag.
    pub fn into_domain(self) -> Result<FoodBox, AuthorityError> {
        let diet = DietaryPreference::from_wire(&self.diet).ok_or_else(|| {
            AuthorityError::UnexpectedResponse {
                detail: format!("unknown dietary tag '{}'", self.diet),
            }
        })?;
        let items = self
            .contents
            .into_iter()
            .map(|item| FoodBoxItem::new(item.id, item.name, item.quantity))
            .collect();
        Ok(FoodBox::new(self.id, self.name, diet, items))
    }
}

/// Parse a comma-joined `id,name,postcode` caterer descriptor into the
/// structured record.
///
/// The business name may itself contain commas, so the id is everything up
/// to the first comma and the postcode everything after the last.
///
/// # Errors
///
/// Returns [`AuthorityError::UnexpectedResponse`] if the descriptor does
/// not have three fields or the postcode is invalid.
pub fn parse_caterer_descriptor(raw: &str) -> Result<CateringCompany, AuthorityError> {
    let malformed = || AuthorityError::UnexpectedResponse {
        detail: format!("malformed caterer descriptor '{raw}'"),
    };
    let (id, rest) = raw.split_once(',').ok_or_else(malformed)?;
    let (name, postcode) = rest.rsplit_once(',').ok_or_else(malformed)?;
    let postcode = Postcode::parse(postcode).map_err(|_| malformed())?;
    Ok(CateringCompany {
        id: id.to_owned(),
        name: name.to_owned(),
        postcode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_box_dto_converts_to_domain() {
        let dto: FoodBoxDto = serde_json::from_str(
            r#"{
                "id": "1",
                "name": "box a",
                "diet": "vegan",
                "delivered_by": "supermarket",
                "contents": [
                    {"id": 1, "name": "tofu", "quantity": 2}
                ]
            }"#,
        )
        .unwrap();
        let food_box = dto.into_domain().unwrap();
        assert_eq!(food_box.id(), "1");
        assert_eq!(food_box.diet(), DietaryPreference::Vegan);
        assert_eq!(food_box.item_quantity(1), Some(2));
    }

    #[test]
    fn unknown_dietary_tag_is_rejected() {
        let dto = FoodBoxDto {
            id: "1".into(),
            name: "box".into(),
            diet: "keto".into(),
            contents: vec![],
        };
        assert!(dto.into_domain().is_err());
    }

    #[test]
    fn caterer_descriptor_parses_three_fields() {
        let company = parse_caterer_descriptor("3,Fine Foods,EH1_2AB").unwrap();
        assert_eq!(company.id, "3");
        assert_eq!(company.name, "Fine Foods");
        assert_eq!(company.postcode.as_str(), "EH1_2AB");
    }

    #[test]
    fn caterer_name_may_contain_commas() {
        let company = parse_caterer_descriptor("7,Soups, Stews and More,EH4_4DD").unwrap();
        assert_eq!(company.name, "Soups, Stews and More");
    }

    #[test]
    fn malformed_descriptors_are_rejected() {
        assert!(parse_caterer_descriptor("no commas here").is_err());
        assert!(parse_caterer_descriptor("1,missing postcode").is_err());
        assert!(parse_caterer_descriptor("1,name,not a postcode").is_err());
    }
}
