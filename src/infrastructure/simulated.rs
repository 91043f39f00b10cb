//! Provider clients that acknowledge payments without talking to anyone.
//!
//! Real integrations plug in behind the same [`ProviderFactory`] port.

use crate::domain::payment::{Payment, PaymentId};
use crate::domain::ports::{ProcessingReceipt, ProviderClient, ProviderClientBox, ProviderFactory};
use crate::domain::provider::PaymentProvider;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Log of payments processed by simulated clients, shared by every client a
/// factory hands out.
pub type ProcessedLog = Arc<Mutex<Vec<(PaymentProvider, PaymentId)>>>;

pub struct SimulatedProviderClient {
    provider: PaymentProvider,
    processed: ProcessedLog,
}

impl SimulatedProviderClient {
    pub fn new(provider: PaymentProvider, processed: ProcessedLog) -> Self {
        Self {
            provider,
            processed,
        }
    }
}

#[async_trait]
impl ProviderClient for SimulatedProviderClient {
    fn provider(&self) -> PaymentProvider {
        self.provider
    }

    async fn process(&self, payment: &Payment) -> Result<ProcessingReceipt> {
        debug!(provider = %self.provider, payment_id = payment.id, amount = %payment.amount, "simulated charge");
        self.processed.lock().await.push((self.provider, payment.id));

        Ok(ProcessingReceipt {
            payment_id: payment.id,
            provider: self.provider,
            reference: format!("{}-{}", self.provider.as_str().to_lowercase(), payment.id),
        })
    }
}

/// Hands out [`SimulatedProviderClient`]s for a fixed set of enabled providers.
#[derive(Clone)]
pub struct SimulatedProviderFactory {
    enabled: HashSet<PaymentProvider>,
    processed: ProcessedLog,
}

impl Default for SimulatedProviderFactory {
    fn default() -> Self {
        Self::with_providers(PaymentProvider::KNOWN)
    }
}

impl SimulatedProviderFactory {
    /// A factory for every known provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory restricted to `providers`. `Default` is never enabled.
    pub fn with_providers(providers: impl IntoIterator<Item = PaymentProvider>) -> Self {
        Self {
            enabled: providers.into_iter().filter(|p| !p.is_default()).collect(),
            processed: ProcessedLog::default(),
        }
    }

    /// Payments processed so far, in processing order.
    pub async fn processed(&self) -> Vec<(PaymentProvider, PaymentId)> {
        self.processed.lock().await.clone()
    }
}

impl ProviderFactory for SimulatedProviderFactory {
    fn create(&self, provider: PaymentProvider) -> Result<ProviderClientBox> {
        if !self.enabled.contains(&provider) {
            return Err(PaymentError::UnsupportedProvider(provider));
        }
        Ok(Box::new(SimulatedProviderClient::new(
            provider,
            self.processed.clone(),
        )))
    }
}
