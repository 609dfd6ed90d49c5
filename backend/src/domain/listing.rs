//! Listing view models for property cards and property detail pages.
//!
//! Pure functions of a [`Property`] and a [`CurrencyFormatter`]; a UI layer
//! renders these without further computation.

use serde::Serialize;
use url::form_urlencoded;

use crate::domain::{CurrencyFormatter, PriceQuote, Property};

/// Cards show at most this many category pills.
pub const CARD_CATEGORY_LIMIT: usize = 3;

/// Formatted price block shared by both views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDisplay {
    /// Price the guest pays per night.
    pub current: String,
    /// Undiscounted price, struck through in the UI. Only set when discounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// `"Save $X"` line. Only set when discounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    /// Unit label shown after the price.
    pub per_night: &'static str,
}

impl PriceDisplay {
    fn build(
        quote: PriceQuote,
        formatter: &dyn CurrencyFormatter,
        savings_suffix: &str,
        per_night: &'static str,
    ) -> Self {
        match (quote.discounted(), quote.savings()) {
            (Some(discounted), Some(savings)) => Self {
                current: formatter.format(discounted),
                original: Some(formatter.format(quote.base())),
                savings: Some(format!(
                    "Save {}{savings_suffix}",
                    formatter.format(savings)
                )),
                per_night,
            },
            _ => Self {
                current: formatter.format(quote.base()),
                original: None,
                savings: None,
                per_night,
            },
        }
    }
}

fn discount_badge(property: &Property) -> Option<String> {
    property.discount().map(|d| format!("-{}%", d.as_str()))
}

fn rating_label(rating: f64) -> Option<String> {
    (rating != 0.0 && !rating.is_nan()).then(|| rating.to_string())
}

/// Summary card shown in listing grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCard {
    /// Property name.
    pub title: String,
    /// Image reference.
    pub image: String,
    /// `"city, state, country"`.
    pub location: String,
    /// Rating label; hidden for unrated properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// At most [`CARD_CATEGORY_LIMIT`] leading category labels.
    pub categories: Vec<String>,
    /// `"-<discount>%"` when discounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_badge: Option<String>,
    /// `["3 bed", "2 bath", "4 guests"]`.
    pub features: Vec<String>,
    /// Price block with `"/ night"` unit.
    pub price: PriceDisplay,
    /// Detail page link; absent when the property has no identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PropertyCard {
    /// Build the card for `property`.
    ///
    /// # Examples
    /// ```
    /// use rentals_backend::domain::{
    ///     Address, Offers, Property, PropertyCard, PropertyDraft, PropertyId, UsdFormatter,
    /// };
    ///
    /// let property = Property::try_from(PropertyDraft {
    ///     id: Some(PropertyId::Number(7)),
    ///     name: "Cabin".into(),
    ///     address: Address { state: "CO".into(), city: "Aspen".into(), country: "USA".into() },
    ///     rating: 4.5,
    ///     category: vec!["Mountain".into()],
    ///     price: 100.0,
    ///     offers: Offers { bed: "2".into(), shower: "1".into(), occupants: "4".into() },
    ///     image: "cabin.jpg".into(),
    ///     discount: Some("20".into()),
    /// })
    /// .expect("valid property");
    ///
    /// let card = PropertyCard::build(&property, &UsdFormatter);
    /// assert_eq!(card.price.current, "$80");
    /// assert_eq!(card.href.as_deref(), Some("/property/7"));
    /// ```
    pub fn build(property: &Property, formatter: &dyn CurrencyFormatter) -> Self {
        let offers = property.offers();
        Self {
            title: property.name().to_owned(),
            image: property.image().to_owned(),
            location: property.location_line(),
            rating: rating_label(property.rating()),
            categories: property
                .category()
                .iter()
                .take(CARD_CATEGORY_LIMIT)
                .cloned()
                .collect(),
            discount_badge: discount_badge(property),
            features: vec![
                format!("{} bed", offers.bed),
                format!("{} bath", offers.shower),
                format!("{} guests", offers.occupants),
            ],
            price: PriceDisplay::build(
                PriceQuote::for_property(property),
                formatter,
                "",
                "/ night",
            ),
            href: property.id().map(|id| format!("/property/{id}")),
        }
    }
}

/// One labelled statistic in the detail feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureStat {
    /// `"Bedrooms"`, `"Bathrooms"`, or `"Guests"`.
    pub label: &'static str,
    /// Value from the property's offer.
    pub value: String,
}

/// Full property page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    /// Property name.
    pub title: String,
    /// Image reference.
    pub image: String,
    /// Rating as text.
    pub rating: String,
    /// `"city, state, country"`.
    pub location: String,
    /// Every category label.
    pub categories: Vec<String>,
    /// `"-<discount>%"` when discounted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_badge: Option<String>,
    /// Bedrooms, bathrooms, and guests.
    pub features: Vec<FeatureStat>,
    /// Marketing paragraph built from name, location, and capacity.
    pub description: String,
    /// Price block with `"per night"` unit.
    pub price: PriceDisplay,
    /// Booking form link carrying the property id as a query parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_href: Option<String>,
}

impl PropertyDetail {
    /// Build the detail page for `property`.
    pub fn build(property: &Property, formatter: &dyn CurrencyFormatter) -> Self {
        let offers = property.offers();
        Self {
            title: property.name().to_owned(),
            image: property.image().to_owned(),
            rating: property.rating().to_string(),
            location: property.location_line(),
            categories: property.category().to_vec(),
            discount_badge: discount_badge(property),
            features: vec![
                FeatureStat {
                    label: "Bedrooms",
                    value: offers.bed.clone(),
                },
                FeatureStat {
                    label: "Bathrooms",
                    value: offers.shower.clone(),
                },
                FeatureStat {
                    label: "Guests",
                    value: offers.occupants.clone(),
                },
            ],
            description: describe(property),
            price: PriceDisplay::build(
                PriceQuote::for_property(property),
                formatter,
                "!",
                "per night",
            ),
            booking_href: property.id().map(|id| {
                let encoded: String =
                    form_urlencoded::byte_serialize(id.to_string().as_bytes()).collect();
                format!("/booking?propertyId={encoded}")
            }),
        }
    }
}

fn describe(property: &Property) -> String {
    let address = property.address();
    let offers = property.offers();
    format!(
        "Experience luxury and comfort in this beautiful {name}. Located in the heart of \
         {city}, {state}, this property offers an unforgettable stay with all modern \
         amenities. Perfect for {occupants} guests, featuring {bed} bedrooms and {shower} \
         bathrooms. Book your stay today!",
        name = property.name().to_lowercase(),
        city = address.city,
        state = address.state,
        occupants = offers.occupants,
        bed = offers.bed,
        shower = offers.shower,
    )
}
