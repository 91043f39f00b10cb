//! Composition of the decider chain from a provider priority order.

use crate::domain::decider::{DeciderChain, DeciderChainBuilder};
use crate::domain::provider::PaymentProvider;
use crate::domain::rule::{IsPreferablePagSeguro, IsPreferablePagarme, IsPreferableStripe, rule_for};
use crate::error::{PaymentError, Result};

/// Priority used when nothing else is configured.
///
/// Must list the same providers, in the same order, as [`default_chain`].
pub const DEFAULT_PRIORITY: [PaymentProvider; 3] = [
    PaymentProvider::PagSeguro,
    PaymentProvider::Pagarme,
    PaymentProvider::Stripe,
];

/// PagSeguro, then Pagarme, then Stripe.
///
/// Keep in sync with [`DEFAULT_PRIORITY`].
pub fn default_chain() -> DeciderChain {
    DeciderChainBuilder::init()
        .add_decider(IsPreferablePagSeguro, PaymentProvider::PagSeguro)
        .add_decider(IsPreferablePagarme, PaymentProvider::Pagarme)
        .add_decider(IsPreferableStripe, PaymentProvider::Stripe)
        .build()
}

/// Builds a chain that consults `priority` front to back.
///
/// Fails if a provider appears twice or has no registered preference rule.
/// An empty `priority` is valid and yields a chain that always answers `Default`.
pub fn chain_from_priority(priority: &[PaymentProvider]) -> Result<DeciderChain> {
    let mut builder = DeciderChainBuilder::init();
    for (index, &provider) in priority.iter().enumerate() {
        if priority[..index].contains(&provider) {
            return Err(PaymentError::ConfigError(format!(
                "provider {} is listed more than once in the priority order",
                provider
            )));
        }
        let rule = rule_for(provider).ok_or_else(|| {
            PaymentError::ConfigError(format!(
                "no preference rule is registered for provider {}",
                provider
            ))
        })?;
        builder = builder.add_shared_decider(rule, provider);
    }
    Ok(builder.build())
}
