//! Zone -> provider routing
//!
//! Maps each generated record to the provider(s) authoritative for its
//! zone, and validates the whole batch before anything is dispatched. A
//! batch with a single unknown zone or provider fails here, before any
//! network call, so a wrong zone computation can never half-submit a
//! batch.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::PairConfig;
use crate::error::{Error, Result};
use crate::record::RecordDescriptor;

/// All records bound for one provider, in generation order
#[derive(Debug, Clone)]
pub struct ProviderBatch {
    /// Provider name the batch is addressed to
    pub provider: String,
    /// Records in the order the synthesis layer produced them
    pub records: Vec<RecordDescriptor>,
}

/// Routes records to providers based on zone ownership
///
/// Built once per engine construction from the zone configuration. Holds
/// the forward map (zone -> owning providers, in configured order) and the
/// derived map (provider -> set of owned zones).
#[derive(Debug)]
pub struct ZoneRouter {
    zone_providers: BTreeMap<String, Vec<String>>,
    provider_zones: BTreeMap<String, BTreeSet<String>>,
}

impl ZoneRouter {
    /// Build the router from configuration
    pub fn new(config: &PairConfig) -> Self {
        let mut zone_providers = BTreeMap::new();
        let mut provider_zones: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (zone_name, zone) in &config.zone {
            zone_providers.insert(zone_name.clone(), zone.providers.clone());
            for provider in &zone.providers {
                provider_zones
                    .entry(provider.clone())
                    .or_default()
                    .insert(zone_name.clone());
            }
        }

        Self {
            zone_providers,
            provider_zones,
        }
    }

    /// Zones a provider is configured to own
    pub fn zones_for_provider(&self, provider: &str) -> Option<&BTreeSet<String>> {
        self.provider_zones.get(provider)
    }

    /// Group a batch of records by owning provider
    ///
    /// The whole batch is validated before any grouping happens: a record
    /// whose zone is unconfigured fails with `UnknownZone`, and an owning
    /// provider with no gateway in `available` fails with
    /// `UnknownProvider`. On success, batches appear in provider
    /// first-appearance order and keep generation order inside; a zone
    /// owned by several providers contributes its record to each.
    pub fn route(
        &self,
        records: Vec<RecordDescriptor>,
        available: &BTreeSet<String>,
    ) -> Result<Vec<ProviderBatch>> {
        // Fail-fast pass over the whole batch
        for record in &records {
            let providers = self
                .zone_providers
                .get(&record.zone)
                .ok_or_else(|| Error::unknown_zone(&record.zone))?;
            for provider in providers {
                if !available.contains(provider) {
                    return Err(Error::unknown_provider(provider));
                }
            }
        }

        let mut batches: Vec<ProviderBatch> = Vec::new();
        let mut index: BTreeMap<String, usize> = BTreeMap::new();

        for record in records {
            for provider in &self.zone_providers[&record.zone] {
                let pos = *index.entry(provider.clone()).or_insert_with(|| {
                    batches.push(ProviderBatch {
                        provider: provider.clone(),
                        records: Vec::new(),
                    });
                    batches.len() - 1
                });
                batches[pos].records.push(record.clone());
            }
        }

        Ok(batches)
    }
}
