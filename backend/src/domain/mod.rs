//! Domain primitives and use-cases.
//!
//! Purpose: keep listing presentation, pricing, and booking intake free of
//! HTTP concerns. Inbound adapters depend on the ports declared here.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Property and friends: validated listing record.
//! - PriceQuote / CurrencyFormatter: nightly price maths and display.
//! - PropertyCard / PropertyDetail: listing view models.
//! - booking: booking draft, validation pipeline, identifiers.

pub mod booking;
pub mod error;
pub mod listing;
pub mod ports;
pub mod pricing;
pub mod property;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::listing::{CARD_CATEGORY_LIMIT, FeatureStat, PriceDisplay, PropertyCard, PropertyDetail};
pub use self::pricing::{CurrencyFormatter, PriceQuote, UsdFormatter, discounted_price};
pub use self::property::{
    Address, Discount, Offers, Property, PropertyDraft, PropertyId, PropertyValidationError,
};
pub use self::trace_id::TraceId;
