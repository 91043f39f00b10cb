use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier a payment is fetched by.
pub type PaymentId = u32;

/// Represents a positive monetary amount for a payment.
///
/// Ensures that payment amounts are always positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Boleto,
    Pix,
    Wallet,
}

/// A payment waiting to be routed to a provider.
///
/// Preference rules receive it as-is; nothing in the decider chain depends on
/// the shape of these fields.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Amount,
    pub currency: String,
    pub method: PaymentMethod,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        amount: Amount,
        currency: impl Into<String>,
        method: PaymentMethod,
    ) -> Self {
        Self {
            id,
            amount,
            currency: currency.into(),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(PaymentError::ValidationError(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(PaymentError::ValidationError(_))
        ));
    }

    #[test]
    fn test_amount_display_is_normalized() {
        let amount = Amount::new(dec!(10.5000)).unwrap();
        assert_eq!(amount.to_string(), "10.5");
    }

    #[test]
    fn test_payment_json_rejects_non_positive_amount() {
        let json = r#"{"id": 1, "amount": "0", "currency": "BRL", "method": "pix"}"#;
        assert!(serde_json::from_str::<Payment>(json).is_err());

        let json = r#"{"id": 1, "amount": "12.30", "currency": "BRL", "method": "pix"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.amount.value(), dec!(12.30));
        assert_eq!(payment.method, PaymentMethod::Pix);
    }
}
