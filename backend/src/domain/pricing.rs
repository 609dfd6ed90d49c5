//! Nightly price computation and currency formatting.
//!
//! Formatting is a capability behind [`CurrencyFormatter`] so the price maths
//! does not depend on any locale handling.

use tracing::warn;

use crate::domain::{Discount, Property};

/// Render a monetary amount for display.
pub trait CurrencyFormatter: Send + Sync {
    /// Format `amount` in the formatter's currency and locale.
    fn format(&self, amount: f64) -> String;
}

/// US dollars, en-US grouping, rounded to whole dollars.
///
/// # Examples
/// ```
/// use rentals_backend::domain::{CurrencyFormatter, UsdFormatter};
///
/// assert_eq!(UsdFormatter.format(80.0), "$80");
/// assert_eq!(UsdFormatter.format(1249.6), "$1,250");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format(&self, amount: f64) -> String {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        // Rounded display amounts are well inside the exactly-representable
        // integer range of f64.
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "value is rounded and its sign handled separately"
        )]
        let whole = rounded.abs() as u64;
        format!("{sign}${}", group_thousands(whole))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Apply a percentage discount: `price - price * (percent / 100)`.
pub fn discounted_price(price: f64, discount: Option<&Discount>) -> Option<f64> {
    discount.map(|d| price - price * (d.percent() / 100.0))
}

/// Base price and optional discounted price for one night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    base: f64,
    discounted: Option<f64>,
}

impl PriceQuote {
    /// Quote a validated property.
    ///
    /// # Examples
    /// ```
    /// use rentals_backend::domain::{Discount, PriceQuote};
    ///
    /// let discount = Discount::parse("20").expect("valid");
    /// let quote = PriceQuote::new(100.0, discount.as_ref());
    /// assert_eq!(quote.discounted(), Some(80.0));
    /// assert_eq!(quote.savings(), Some(20.0));
    /// ```
    pub fn new(base: f64, discount: Option<&Discount>) -> Self {
        Self {
            base,
            discounted: discounted_price(base, discount),
        }
    }

    /// Quote a base price against an unvalidated discount string.
    ///
    /// Empty strings mean no discount. Strings that do not parse as a
    /// percentage are ignored rather than producing a non-numeric price.
    pub fn from_raw(base: f64, discount: Option<&str>) -> Self {
        let parsed = match discount.map(Discount::parse) {
            Some(Ok(parsed)) => parsed,
            Some(Err(error)) => {
                warn!(%error, "ignoring unusable discount");
                None
            }
            None => None,
        };
        Self::new(base, parsed.as_ref())
    }

    /// Quote for a property's nightly price.
    pub fn for_property(property: &Property) -> Self {
        Self::new(property.price(), property.discount())
    }

    /// Undiscounted nightly price.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Discounted nightly price, when a discount applies.
    pub fn discounted(&self) -> Option<f64> {
        self.discounted
    }

    /// Amount saved per night when a discount applies.
    pub fn savings(&self) -> Option<f64> {
        self.discounted.map(|discounted| self.base - discounted)
    }

    /// Price a guest pays per night.
    pub fn current(&self) -> f64 {
        self.discounted.unwrap_or(self.base)
    }
}
