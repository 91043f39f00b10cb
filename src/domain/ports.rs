use super::payment::{Payment, PaymentId};
use super::provider::PaymentProvider;
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// What a provider hands back after processing a payment.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ProcessingReceipt {
    pub payment_id: PaymentId,
    pub provider: PaymentProvider,
    pub reference: String,
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Fails with [`PaymentError::PaymentNotFound`](crate::error::PaymentError::PaymentNotFound)
    /// when no payment has this id.
    async fn get_by_id(&self, id: PaymentId) -> Result<Payment>;
    async fn store(&self, payment: Payment) -> Result<()>;
}

#[async_trait]
pub trait ProviderClient: Send + Sync {
    fn provider(&self) -> PaymentProvider;
    async fn process(&self, payment: &Payment) -> Result<ProcessingReceipt>;
}

pub trait ProviderFactory: Send + Sync {
    /// Fails with [`PaymentError::UnsupportedProvider`](crate::error::PaymentError::UnsupportedProvider)
    /// for `Default` and for providers it has no client for.
    fn create(&self, provider: PaymentProvider) -> Result<ProviderClientBox>;
}

pub type PaymentRepositoryBox = Box<dyn PaymentRepository>;
pub type ProviderClientBox = Box<dyn ProviderClient>;
pub type ProviderFactoryBox = Box<dyn ProviderFactory>;
