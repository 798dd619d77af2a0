// luxecart/src/cart/money.rs

//! Integer-cent money type. Catalog feeds quote decimal prices; they are
//! rounded to the nearest cent on the way in so cart arithmetic stays exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
  pub const ZERO: Money = Money(0);

  pub const fn from_cents(cents: i64) -> Self {
    Money(cents)
  }

  /// Converts a decimal amount (e.g. `199.99`) to cents. Returns `None`
  /// for NaN, infinities and values outside the `i64` cent range.
  pub fn from_decimal(amount: f64) -> Option<Self> {
    if !amount.is_finite() {
      return None;
    }
    let cents = (amount * 100.0).round();
    if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
      return None;
    }
    Some(Money(cents as i64))
  }

  pub const fn cents(self) -> i64 {
    self.0
  }

  pub fn as_decimal(self) -> f64 {
    self.0 as f64 / 100.0
  }

  pub const fn is_negative(self) -> bool {
    self.0 < 0
  }

  pub const fn is_positive(self) -> bool {
    self.0 > 0
  }

  pub fn checked_add(self, other: Money) -> Option<Money> {
    self.0.checked_add(other.0).map(Money)
  }

  pub fn checked_mul(self, quantity: u32) -> Option<Money> {
    self.0.checked_mul(i64::from(quantity)).map(Money)
  }

  /// Price after taking `percent` off, rounded half-up to the cent.
  /// Percentages above 100 are treated as 100.
  pub fn discounted(self, percent: u8) -> Money {
    let keep = i128::from(100 - percent.min(100));
    let scaled = i128::from(self.0) * keep;
    let rounded = if scaled >= 0 { (scaled + 50) / 100 } else { (scaled - 50) / 100 };
    Money(rounded as i64)
  }
}

impl Add for Money {
  type Output = Money;

  // Saturates; line totals are overflow-checked when rows are written.
  fn add(self, rhs: Money) -> Money {
    Money(self.0.saturating_add(rhs.0))
  }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
    iter.fold(Money::ZERO, Add::add)
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.unsigned_abs();
    write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
  }
}

/// Serde adapter for feeds that carry prices as JSON decimals
/// (`"price": 109.95`). Use with `#[serde(with = "money::decimal")]`.
pub mod decimal {
  use super::Money;
  use serde::de::Error as _;
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(value: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(value.as_decimal())
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    Money::from_decimal(raw).ok_or_else(|| D::Error::custom(format!("price {} is not a representable amount", raw)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decimal_conversion_rounds_to_nearest_cent() {
    assert_eq!(Money::from_decimal(199.99), Some(Money::from_cents(19999)));
    assert_eq!(Money::from_decimal(109.95), Some(Money::from_cents(10995)));
    assert_eq!(Money::from_decimal(0.005), Some(Money::from_cents(1)));
    assert_eq!(Money::from_decimal(f64::NAN), None);
    assert_eq!(Money::from_decimal(f64::INFINITY), None);
  }

  #[test]
  fn display_formats_dollars_and_cents() {
    assert_eq!(Money::from_cents(20998).to_string(), "$209.98");
    assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    assert_eq!(Money::from_cents(-150).to_string(), "-$1.50");
  }

  #[test]
  fn discount_rounds_half_up() {
    assert_eq!(Money::from_cents(19999).discounted(25), Money::from_cents(14999));
    assert_eq!(Money::from_cents(10000).discounted(10), Money::from_cents(9000));
    assert_eq!(Money::from_cents(999).discounted(50), Money::from_cents(500));
    assert_eq!(Money::from_cents(999).discounted(150), Money::ZERO);
  }

  #[test]
  fn checked_mul_reports_overflow() {
    assert_eq!(Money::from_cents(19999).checked_mul(3), Some(Money::from_cents(59997)));
    assert_eq!(Money::from_cents(i64::MAX).checked_mul(2), None);
  }
}
