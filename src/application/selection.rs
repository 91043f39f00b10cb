use crate::domain::decider::{Decider, DeciderChain};
use crate::domain::payment::PaymentId;
use crate::domain::ports::{PaymentRepositoryBox, ProcessingReceipt, ProviderFactoryBox};
use crate::domain::provider::PaymentProvider;
use crate::error::Result;
use tracing::{debug, info, warn};

/// Result of routing and processing one payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOutcome {
    pub payment_id: PaymentId,
    pub provider: PaymentProvider,
    pub receipt: ProcessingReceipt,
}

/// Routes a payment to a provider and hands it over for processing.
///
/// `ProcessPaymentUseCase` owns the collaborators it needs: a repository to fetch
/// payments from, a factory that turns a provider into a client, and the decider
/// chain built at wiring time.
pub struct ProcessPaymentUseCase {
    payment_repository: PaymentRepositoryBox,
    provider_factory: ProviderFactoryBox,
    chain: DeciderChain,
}

impl ProcessPaymentUseCase {
    /// Creates a new `ProcessPaymentUseCase`.
    ///
    /// # Arguments
    ///
    /// * `payment_repository` - Where payments are fetched from by id.
    /// * `provider_factory` - Resolves a provider into a client.
    /// * `chain` - The prioritized provider rules.
    pub fn new(
        payment_repository: PaymentRepositoryBox,
        provider_factory: ProviderFactoryBox,
        chain: DeciderChain,
    ) -> Self {
        Self {
            payment_repository,
            provider_factory,
            chain,
        }
    }

    pub fn chain(&self) -> &DeciderChain {
        &self.chain
    }

    /// Fetches the payment and decides its provider without processing it.
    pub async fn select_provider(&self, payment_id: PaymentId) -> Result<PaymentProvider> {
        let payment = self.payment_repository.get_by_id(payment_id).await?;
        let provider = self.chain.decide(&payment);
        debug!(payment_id, %provider, "provider selected");
        Ok(provider)
    }

    /// Fetches the payment, decides its provider and processes it there.
    ///
    /// A `Default` decision is passed to the factory like any other provider; the
    /// factory decides whether there is a client for it. Repository, factory and
    /// client failures are returned unchanged.
    pub async fn execute(&self, payment_id: PaymentId) -> Result<ProcessingOutcome> {
        let payment = self.payment_repository.get_by_id(payment_id).await?;

        let provider = self.chain.decide(&payment);
        if provider.is_default() {
            warn!(payment_id, "no preference rule matched, falling back to default provider");
        } else {
            debug!(payment_id, %provider, "provider selected");
        }

        let client = self.provider_factory.create(provider)?;
        let receipt = client.process(&payment).await?;
        info!(payment_id, %provider, reference = %receipt.reference, "payment processed");

        Ok(ProcessingOutcome {
            payment_id,
            provider,
            receipt,
        })
    }
}
