use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The external payment providers a payment can be routed to.
///
/// `Default` is the sentinel produced when no preference rule matched. It is a
/// regular value: callers decide what it leads to.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// case-insensitive names as the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaymentProvider {
    Default,
    PagSeguro,
    MercadoPago,
    PayPal,
    Stripe,
    Pagarme,
}

impl PaymentProvider {
    /// Every provider except the `Default` sentinel.
    pub const KNOWN: [PaymentProvider; 5] = [
        PaymentProvider::PagSeguro,
        PaymentProvider::MercadoPago,
        PaymentProvider::PayPal,
        PaymentProvider::Stripe,
        PaymentProvider::Pagarme,
    ];

    pub fn is_default(&self) -> bool {
        matches!(self, PaymentProvider::Default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentProvider::Default => "Default",
            PaymentProvider::PagSeguro => "PagSeguro",
            PaymentProvider::MercadoPago => "MercadoPago",
            PaymentProvider::PayPal => "PayPal",
            PaymentProvider::Stripe => "Stripe",
            PaymentProvider::Pagarme => "Pagarme",
        }
    }
}

impl fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(PaymentProvider::Default),
            "pagseguro" => Ok(PaymentProvider::PagSeguro),
            "mercadopago" => Ok(PaymentProvider::MercadoPago),
            "paypal" => Ok(PaymentProvider::PayPal),
            "stripe" => Ok(PaymentProvider::Stripe),
            "pagarme" => Ok(PaymentProvider::Pagarme),
            _ => Err(format!("Unknown payment provider: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for PaymentProvider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse::<PaymentProvider>().map_err(serde::de::Error::custom)
    }
}
