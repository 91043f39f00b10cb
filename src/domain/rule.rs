//! Preference rules: predicates answering "is provider X preferable for this payment?".
//!
//! A rule knows nothing about priority. Ordering belongs to the
//! [`DeciderChain`](super::decider::DeciderChain) the rule is placed in.

use super::payment::Payment;
use super::provider::PaymentProvider;
use std::sync::Arc;

/// A pure predicate over `T`.
///
/// Implementations must be total: every well-formed `T` yields `true` or
/// `false`, never a panic.
pub trait Specification<T: ?Sized> {
    fn is_satisfied_by(&self, target: &T) -> bool;
}

impl<T: ?Sized, F> Specification<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied_by(&self, target: &T) -> bool {
        self(target)
    }
}

/// A [`Specification`] over payments that can be shared between threads.
pub trait PreferenceRule: Specification<Payment> + Send + Sync {}

impl<R> PreferenceRule for R where R: Specification<Payment> + Send + Sync + ?Sized {}

/// Shared handle to a rule. Several chain nodes may point at the same rule.
pub type PreferenceRuleRef = Arc<dyn PreferenceRule>;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsPreferablePagSeguro;

impl Specification<Payment> for IsPreferablePagSeguro {
    fn is_satisfied_by(&self, _payment: &Payment) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsPreferablePagarme;

impl Specification<Payment> for IsPreferablePagarme {
    fn is_satisfied_by(&self, _payment: &Payment) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsPreferableStripe;

impl Specification<Payment> for IsPreferableStripe {
    fn is_satisfied_by(&self, _payment: &Payment) -> bool {
        true
    }
}

/// Never satisfied. Useful for building chains by hand in tests and custom wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Specification<Payment> for Never {
    fn is_satisfied_by(&self, _payment: &Payment) -> bool {
        false
    }
}

/// Looks up the rule registered for `provider`.
///
/// Returns `None` for `Default` and for providers nobody has written a rule for yet.
pub fn rule_for(provider: PaymentProvider) -> Option<PreferenceRuleRef> {
    match provider {
        PaymentProvider::PagSeguro => Some(Arc::new(IsPreferablePagSeguro)),
        PaymentProvider::Pagarme => Some(Arc::new(IsPreferablePagarme)),
        PaymentProvider::Stripe => Some(Arc::new(IsPreferableStripe)),
        PaymentProvider::MercadoPago | PaymentProvider::PayPal | PaymentProvider::Default => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{Amount, PaymentMethod};
    use rust_decimal_macros::dec;

    fn payment() -> Payment {
        Payment::new(1, Amount::new(dec!(10.0)).unwrap(), "BRL", PaymentMethod::Card)
    }

    #[test]
    fn test_placeholder_rules_always_match() {
        let payment = payment();
        assert!(IsPreferablePagSeguro.is_satisfied_by(&payment));
        assert!(IsPreferablePagarme.is_satisfied_by(&payment));
        assert!(IsPreferableStripe.is_satisfied_by(&payment));
        assert!(!Never.is_satisfied_by(&payment));
    }

    #[test]
    fn test_closure_is_a_rule() {
        let only_pix: PreferenceRuleRef =
            Arc::new(|p: &Payment| p.method == PaymentMethod::Pix);

        let mut payment = payment();
        assert!(!only_pix.is_satisfied_by(&payment));
        payment.method = PaymentMethod::Pix;
        assert!(only_pix.is_satisfied_by(&payment));
    }

    #[test]
    fn test_rule_registry() {
        assert!(rule_for(PaymentProvider::PagSeguro).is_some());
        assert!(rule_for(PaymentProvider::Pagarme).is_some());
        assert!(rule_for(PaymentProvider::Stripe).is_some());
        assert!(rule_for(PaymentProvider::PayPal).is_none());
        assert!(rule_for(PaymentProvider::Default).is_none());
    }
}
