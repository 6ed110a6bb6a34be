//! Core pairing engine
//!
//! The PairEngine is responsible for:
//! - Synthesizing record descriptors from operator input
//! - Routing each descriptor to the provider(s) owning its zone
//! - Dispatching descriptors through the injected gateways
//! - Aggregating per-record outcomes into an ordered report
//!
//! ## Data Flow
//!
//! ```text
//! input ──> synthesis ──> routing ──> dispatch ──> report
//!           (pure)        (pure,      (gateway,
//!                          fail-fast)  per record)
//! ```
//!
//! Synthesis and routing are validated as a unit before submission
//! begins: any `InvalidInput`/`InvalidAddress`/`UnknownZone`/... aborts
//! the whole batch with zero network side effects. Once dispatch starts,
//! a per-record gateway failure is recorded and the rest of the batch
//! keeps going.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::PairConfig;
use crate::error::Result;
use crate::record::RecordDescriptor;
use crate::report::Report;
use crate::router::ZoneRouter;
use crate::synth::{self, HostInput, TenantInput};
use crate::traits::RecordGateway;

/// Record synthesis and dispatch engine
///
/// Construct one per invocation with the loaded configuration and one
/// gateway per configured provider. The engine owns no network state
/// itself; all I/O happens inside the gateways.
pub struct PairEngine {
    config: PairConfig,
    router: ZoneRouter,
    gateways: BTreeMap<String, Arc<dyn RecordGateway>>,
}

impl PairEngine {
    /// Create a new engine
    ///
    /// Validates the configuration and derives the zone/provider routing
    /// maps once. `gateways` maps provider names (as used in zone
    /// configuration) to their gateway implementations.
    pub fn new(
        config: PairConfig,
        gateways: BTreeMap<String, Arc<dyn RecordGateway>>,
    ) -> Result<Self> {
        config.validate()?;
        let router = ZoneRouter::new(&config);
        Ok(Self {
            config,
            router,
            gateways,
        })
    }

    /// Add paired forward and reverse records for one host
    ///
    /// For an FQDN with an IPv4 and/or IPv6 address this submits up to
    /// four records (A + PTR per family) and reports each outcome.
    pub async fn add_host(&self, input: &HostInput) -> Result<Report> {
        let records = synth::host_records(input)?;
        debug!("Synthesized {} record(s) for {}", records.len(), input.fqdn);
        self.dispatch(records).await
    }

    /// Bulk-add reverse records for a tenant prefix assignment
    pub async fn tenant_reverse(&self, input: &TenantInput) -> Result<Report> {
        let records = synth::tenant_records(input)?;
        debug!("Synthesized {} tenant record(s)", records.len());
        self.dispatch(records).await
    }

    /// Route a synthesized batch and submit it through the gateways
    ///
    /// Routing validates every record before the first submission.
    /// Batches are dispatched sequentially, records in generation order
    /// within each batch, and the report preserves submission order.
    async fn dispatch(&self, records: Vec<RecordDescriptor>) -> Result<Report> {
        let defaults = self.config.defaults;
        let records: Vec<RecordDescriptor> = records
            .into_iter()
            .map(|r| r.with_defaults(defaults.ttl, defaults.proxied))
            .collect();

        let available: BTreeSet<String> = self.gateways.keys().cloned().collect();
        let batches = self.router.route(records, &available)?;

        let mut report = Report::new();
        for batch in batches {
            let gateway = &self.gateways[&batch.provider];
            debug!(
                "Dispatching {} record(s) to provider {}",
                batch.records.len(),
                batch.provider
            );

            for record in &batch.records {
                let result = gateway.submit(record).await;
                if result.is_success() {
                    info!(
                        "Added {} record {} -> {} via {}",
                        record.rtype, record.name, record.content, batch.provider
                    );
                } else {
                    warn!(
                        "Failed {} record {} -> {} via {}: {}",
                        record.rtype,
                        record.name,
                        record.content,
                        batch.provider,
                        result.errors.join("; ")
                    );
                }
                report.push(result);
            }
        }

        Ok(report)
    }
}
