//! Rental property record consumed by the presentation layer.
//!
//! Properties arrive as [`PropertyDraft`] values from an external data source
//! and are validated once into an immutable [`Property`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised while building a [`Property`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyValidationError {
    /// Name is empty after trimming whitespace.
    #[error("property name must not be empty")]
    EmptyName,
    /// Price is negative, NaN, or infinite.
    #[error("nightly price must be finite and non-negative (got {value})")]
    InvalidPrice {
        /// Rejected price.
        value: f64,
    },
    /// Discount text is not a finite number.
    #[error("discount must be a numeric percentage (got {value:?})")]
    InvalidDiscount {
        /// Rejected discount text.
        value: String,
    },
    /// Discount parsed but lies outside `[0, 100]`.
    #[error("discount must be between 0 and 100 (got {value})")]
    DiscountOutOfRange {
        /// Rejected discount value.
        value: f64,
    },
}

/// Property identifier; upstream sources use either strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyId {
    /// Numeric identifier.
    Number(i64),
    /// Free-form identifier such as a slug.
    Text(String),
}

impl PropertyId {
    /// Whether the identifier carries a usable value (non-zero, non-empty).
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(value) => *value != 0,
            Self::Text(value) => !value.is_empty(),
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Postal address shown on listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// State or region.
    pub state: String,
    /// City or town.
    pub city: String,
    /// Country name.
    pub country: String,
}

/// Capacity offer. Values are free text as supplied upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offers {
    /// Bedrooms, e.g. `"3"`.
    pub bed: String,
    /// Bathrooms.
    pub shower: String,
    /// Guest capacity, e.g. `"4-6"`.
    pub occupants: String,
}

/// Discount percentage in `[0, 100]`, keeping the supplied text for badges.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    raw: String,
    percent: f64,
}

impl Discount {
    /// Parse a percentage string such as `"20"` or `"12.5"`.
    ///
    /// Returns `Ok(None)` for an empty string, which upstream data uses to
    /// mean "no discount".
    ///
    /// # Examples
    /// ```
    /// use rentals_backend::domain::Discount;
    ///
    /// let discount = Discount::parse("20").expect("valid").expect("present");
    /// assert_eq!(discount.percent(), 20.0);
    /// assert!(Discount::parse("").expect("valid").is_none());
    /// assert!(Discount::parse("abc").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Option<Self>, PropertyValidationError> {
        if raw.is_empty() {
            return Ok(None);
        }
        let trimmed = raw.trim();
        let percent: f64 = trimmed
            .parse()
            .map_err(|_| PropertyValidationError::InvalidDiscount {
                value: raw.to_owned(),
            })?;
        if !percent.is_finite() {
            return Err(PropertyValidationError::InvalidDiscount {
                value: raw.to_owned(),
            });
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(PropertyValidationError::DiscountOutOfRange { value: percent });
        }
        Ok(Some(Self {
            raw: trimmed.to_owned(),
            percent,
        }))
    }

    /// Percentage as a number.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Percentage as supplied, without surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Unvalidated property payload, shaped like the upstream JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    /// Identifier; `0` or `""` count as absent.
    #[serde(default)]
    pub id: Option<PropertyId>,
    /// Listing title.
    pub name: String,
    /// Postal address.
    pub address: Address,
    /// Average guest rating; `0` means unrated.
    pub rating: f64,
    /// Category labels in display order.
    #[serde(default)]
    pub category: Vec<String>,
    /// Nightly price before discount.
    pub price: f64,
    /// Capacity offer.
    pub offers: Offers,
    /// Image reference.
    pub image: String,
    /// Percentage discount as text; empty means none.
    #[serde(default)]
    pub discount: Option<String>,
}

/// Immutable, validated property record.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    id: Option<PropertyId>,
    name: String,
    address: Address,
    rating: f64,
    category: Vec<String>,
    price: f64,
    offers: Offers,
    image: String,
    discount: Option<Discount>,
}

impl TryFrom<PropertyDraft> for Property {
    type Error = PropertyValidationError;

    fn try_from(value: PropertyDraft) -> Result<Self, Self::Error> {
        if value.name.trim().is_empty() {
            return Err(PropertyValidationError::EmptyName);
        }
        if !value.price.is_finite() || value.price < 0.0 {
            return Err(PropertyValidationError::InvalidPrice { value: value.price });
        }
        let discount = match value.discount.as_deref() {
            Some(raw) => Discount::parse(raw)?,
            None => None,
        };

        Ok(Self {
            id: value.id.filter(PropertyId::is_present),
            name: value.name,
            address: value.address,
            rating: value.rating,
            category: value.category,
            price: value.price,
            offers: value.offers,
            image: value.image,
            discount,
        })
    }
}

impl Property {
    /// Identifier, when the record carries a usable one.
    pub fn id(&self) -> Option<&PropertyId> {
        self.id.as_ref()
    }

    /// Listing title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Postal address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Average guest rating.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Category labels in display order.
    pub fn category(&self) -> &[String] {
        &self.category
    }

    /// Nightly base price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Capacity offer.
    pub fn offers(&self) -> &Offers {
        &self.offers
    }

    /// Image reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Validated discount, if any.
    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    /// `"city, state, country"` line used by both listing views.
    pub fn location_line(&self) -> String {
        let Address {
            city,
            state,
            country,
        } = &self.address;
        format!("{city}, {state}, {country}")
    }
}
