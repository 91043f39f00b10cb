//! Provider selection through an ordered chain of preference rules.
//!
//! Nodes are kept in a `Vec` in priority order instead of being linked to
//! their successors. The first node whose rule is satisfied wins; when none is,
//! the chain answers [`PaymentProvider::Default`].

use super::payment::Payment;
use super::provider::PaymentProvider;
use super::rule::{PreferenceRule, PreferenceRuleRef, Specification};
use std::fmt;
use std::sync::Arc;

/// Picks a provider for a payment. Never fails: "no answer" is `Default`.
pub trait Decider: Send + Sync {
    fn decide(&self, payment: &Payment) -> PaymentProvider;
}

/// One rule paired with the provider it guards.
#[derive(Clone)]
pub struct DeciderNode {
    rule: PreferenceRuleRef,
    provider: PaymentProvider,
}

impl DeciderNode {
    pub fn new(rule: PreferenceRuleRef, provider: PaymentProvider) -> Self {
        Self { rule, provider }
    }

    pub fn provider(&self) -> PaymentProvider {
        self.provider
    }

    /// Returns this node's provider if its rule is satisfied by `payment`.
    pub fn evaluate(&self, payment: &Payment) -> Option<PaymentProvider> {
        self.rule.is_satisfied_by(payment).then_some(self.provider)
    }
}

impl fmt::Debug for DeciderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeciderNode")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

/// An immutable, finite sequence of [`DeciderNode`]s in descending priority.
///
/// Built once through [`DeciderChainBuilder`] and then only read, so a single
/// chain can serve concurrent callers without locking.
#[derive(Debug, Clone, Default)]
pub struct DeciderChain {
    nodes: Vec<DeciderNode>,
}

impl DeciderChain {
    /// A chain with no nodes. Every decision is `Default`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Providers in evaluation order.
    pub fn providers(&self) -> impl Iterator<Item = PaymentProvider> + '_ {
        self.nodes.iter().map(DeciderNode::provider)
    }
}

impl Decider for DeciderChain {
    fn decide(&self, payment: &Payment) -> PaymentProvider {
        self.nodes
            .iter()
            .find_map(|node| node.evaluate(payment))
            .unwrap_or(PaymentProvider::Default)
    }
}

/// Collects `(rule, provider)` pairs in call order and turns them into a
/// [`DeciderChain`].
///
/// Starts with an empty sequence, so calling [`build`](Self::build) before any
/// [`add_decider`](Self::add_decider) is valid and yields an empty chain.
#[derive(Debug, Default)]
pub struct DeciderChainBuilder {
    nodes: Vec<DeciderNode>,
}

impl DeciderChainBuilder {
    pub fn init() -> Self {
        Self::default()
    }

    /// Appends a node after every node added so far.
    pub fn add_decider<R>(mut self, rule: R, provider: PaymentProvider) -> Self
    where
        R: PreferenceRule + 'static,
    {
        self.nodes.push(DeciderNode::new(Arc::new(rule), provider));
        self
    }

    /// Like [`add_decider`](Self::add_decider) for a rule that is already shared.
    pub fn add_shared_decider(mut self, rule: PreferenceRuleRef, provider: PaymentProvider) -> Self {
        self.nodes.push(DeciderNode::new(rule, provider));
        self
    }

    /// Finalizes the chain. Consumes the builder.
    pub fn build(self) -> DeciderChain {
        DeciderChain { nodes: self.nodes }
    }
}
