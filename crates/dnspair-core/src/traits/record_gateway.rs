// # Record Gateway Trait
//
// Defines the interface for submitting DNS records to provider APIs.
//
// ## Implementations
//
// - Cloudflare: `dnspair-provider-cloudflare` crate
//
// ## Contract
//
// Gateways are the only place network I/O happens. Everything upstream of
// them (synthesis, routing) is pure and has already been validated by the
// time a gateway sees a record, so a gateway never aborts a batch:
// transport errors, HTTP status failures, and provider-reported rejections
// all come back as a `Failure` outcome for that one record. The engine
// keeps submitting the rest of the batch and reports everything in order.
//
// Gateways own nothing else: no retries, no reordering, no batching, no
// caching beyond the injected zone-ID cache. One record in, one outcome
// out.

use async_trait::async_trait;

use crate::record::RecordDescriptor;
use crate::report::OperationResult;

/// Trait for provider gateway implementations
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait RecordGateway: Send + Sync {
    /// Submit one record for creation in its zone
    ///
    /// Infallible at the type level: every failure mode is folded into a
    /// `Failure` [`OperationResult`] whose error list carries the
    /// provider-reported messages or transport/status context.
    async fn submit(&self, record: &RecordDescriptor) -> OperationResult;

    /// Get the provider name (for routing, logging, and reports)
    fn provider_name(&self) -> &'static str;
}
