//! Shared test doubles for the dnspair-core integration tests

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use dnspair_core::config::{CloudflareApi, PairConfig, ProviderConfig, RecordDefaults, ZoneConfig};
use dnspair_core::record::RecordDescriptor;
use dnspair_core::report::OperationResult;
use dnspair_core::traits::RecordGateway;

/// Gateway double that records every submission and fails on request
///
/// Failures are keyed by record name, so a test can make exactly one
/// record of a batch fail and watch the rest go through.
pub struct MockGateway {
    name: &'static str,
    submissions: Mutex<Vec<RecordDescriptor>>,
    fail_names: HashSet<String>,
}

impl MockGateway {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            submissions: Mutex::new(Vec::new()),
            fail_names: HashSet::new(),
        })
    }

    pub fn failing_on(name: &'static str, fail_names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            name,
            submissions: Mutex::new(Vec::new()),
            fail_names: fail_names.iter().map(|n| n.to_string()).collect(),
        })
    }

    /// Everything submitted so far, in submission order
    pub fn submissions(&self) -> Vec<RecordDescriptor> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordGateway for MockGateway {
    async fn submit(&self, record: &RecordDescriptor) -> OperationResult {
        self.submissions.lock().unwrap().push(record.clone());
        if self.fail_names.contains(&record.name) {
            OperationResult::failure(
                record,
                self.name,
                vec![format!("mock rejection of {}", record.name)],
            )
        } else {
            OperationResult::success(record, self.name)
        }
    }

    fn provider_name(&self) -> &'static str {
        self.name
    }
}

/// Build a config declaring the given zone -> providers entries
///
/// Every referenced provider gets a throwaway credentials entry so the
/// config validates.
pub fn config_with_zones(zones: &[(&str, &[&str])]) -> PairConfig {
    let mut config = PairConfig {
        defaults: RecordDefaults::default(),
        zone: BTreeMap::new(),
        provider: BTreeMap::new(),
    };

    for (zone, providers) in zones {
        config.zone.insert(
            zone.to_string(),
            ZoneConfig {
                providers: providers.iter().map(|p| p.to_string()).collect(),
            },
        );
        for provider in *providers {
            config.provider.insert(
                provider.to_string(),
                ProviderConfig::Cloudflare {
                    api: CloudflareApi {
                        baseurl: "https://api.cloudflare.com/client/v4/".to_string(),
                        email: "ops@example.com".to_string(),
                        key: "test-key".to_string(),
                    },
                },
            );
        }
    }

    config
}
