// # Cloudflare Record Gateway
//
// This crate provides the Cloudflare implementation of the dnspair record
// gateway: one `POST /zones/:zone_id/dns_records` per record descriptor.
//
// ## Behavior
//
// - Zone identifiers are resolved by name through the injected
//   `ZoneIdCache`; a miss costs one `GET /zones?name=...` round trip and
//   the result is stored for subsequent invocations. A failed store is
//   logged and ignored (the identifier is still used for this run).
// - Every failure mode — transport error, HTTP status, provider-reported
//   `errors[]` — is folded into a `Failure` outcome for that record. The
//   gateway never aborts a batch; that is the engine's decision to make
//   before dispatch.
// - No retry, no backoff, no batching. One API call per step.
//
// ## Security
//
// - The API key never appears in logs; the Debug impl redacts it
//
// ## API Reference
//
// - Cloudflare API v4: https://developers.cloudflare.com/api/
// - List Zones: GET `/zones?name=...`
// - Create DNS Record: POST `/zones/:zone_id/dns_records`

use async_trait::async_trait;
use dnspair_core::record::RecordDescriptor;
use dnspair_core::report::OperationResult;
use dnspair_core::traits::{RecordGateway, ZoneIdCache};
use dnspair_core::{CloudflareApi, Error};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Default HTTP timeout for API requests
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudflare record gateway
///
/// Stateless apart from the reqwest client and the injected zone-ID
/// cache; safe to share across tasks.
pub struct CloudflareGateway {
    /// API base URL, without trailing slash
    baseurl: String,

    /// API key for X-Auth-Key
    /// Never log this value
    key: String,

    /// Account email for X-Auth-Email
    email: String,

    /// HTTP client for API requests
    client: reqwest::Client,

    /// Caller-owned zone-ID cache
    cache: Arc<dyn ZoneIdCache>,
}

// Custom Debug implementation that hides the API key
impl std::fmt::Debug for CloudflareGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareGateway")
            .field("baseurl", &self.baseurl)
            .field("email", &self.email)
            .field("key", &"<REDACTED>")
            .finish()
    }
}

impl CloudflareGateway {
    /// Create a new Cloudflare gateway from its API configuration
    ///
    /// Fails fast on empty credentials; the engine should never get to
    /// dispatch with an unusable gateway.
    pub fn new(api: &CloudflareApi, cache: Arc<dyn ZoneIdCache>) -> Result<Self, Error> {
        if api.email.is_empty() {
            return Err(Error::config("Cloudflare API email cannot be empty"));
        }
        if api.key.is_empty() {
            return Err(Error::config("Cloudflare API key cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            baseurl: api.baseurl.trim_end_matches('/').to_string(),
            key: api.key.clone(),
            email: api.email.clone(),
            client,
            cache,
        })
    }

    /// Resolve the zone ID for a zone name, via cache or API lookup
    ///
    /// # API Call (cache miss only)
    ///
    /// ```http
    /// GET /zones?name=example.com
    /// X-Auth-Email: <email>
    /// X-Auth-Key: <key>
    /// ```
    async fn zone_id(&self, zone: &str) -> Result<String, Vec<String>> {
        if let Some(id) = self.cache.get(zone).await {
            tracing::debug!("Zone ID for {} served from cache", zone);
            return Ok(id);
        }

        tracing::debug!("Looking up zone ID for {}", zone);
        let url = format!("{}/zones?name={}", self.baseurl, zone);
        let response = self
            .client
            .get(&url)
            .header("X-Auth-Email", &self.email)
            .header("X-Auth-Key", &self.key)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| vec![format!("Zone lookup request failed: {}", e)])?;

        let status = response.status();
        let json: Value = response.json().await.map_err(|e| {
            vec![format!(
                "Zone lookup for {}: unreadable response (status {}): {}",
                zone, status, e
            )]
        })?;

        if !status.is_success() {
            let mut errors = vec![status_context("Zone lookup", status.as_u16())];
            errors.extend(api_errors(&json));
            return Err(errors);
        }

        let id = extract_zone_id(&json, zone)?;

        // Stale entries are fine; a failed store only costs a refetch
        if let Err(e) = self.cache.put(zone, &id).await {
            tracing::warn!("Failed to cache zone ID for {}: {}", zone, e);
        }

        Ok(id)
    }

    /// Create one DNS record in a zone
    ///
    /// # API Call
    ///
    /// ```http
    /// POST /zones/:zone_id/dns_records
    /// {"type": "PTR", "name": "5", "content": "host1.example.com",
    ///  "ttl": 1, "proxied": false}
    /// ```
    async fn create_record(
        &self,
        zone_id: &str,
        record: &RecordDescriptor,
    ) -> Result<(), Vec<String>> {
        let payload = serde_json::json!({
            "type": record.rtype.as_str(),
            "name": record.name,
            "content": record.content,
            "ttl": record.ttl.unwrap_or(1),
            "proxied": record.proxied.unwrap_or(false),
        });

        let url = format!("{}/zones/{}/dns_records", self.baseurl, zone_id);
        let response = self
            .client
            .post(&url)
            .header("X-Auth-Email", &self.email)
            .header("X-Auth-Key", &self.key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| vec![format!("Record creation request failed: {}", e)])?;

        let status = response.status();
        let json: Value = response.json().await.map_err(|e| {
            vec![format!(
                "Record creation: unreadable response (status {}): {}",
                status, e
            )]
        })?;

        if !status.is_success() {
            let mut errors = vec![status_context("Record creation", status.as_u16())];
            errors.extend(api_errors(&json));
            return Err(errors);
        }

        if json["success"].as_bool() != Some(true) {
            let mut errors = api_errors(&json);
            if errors.is_empty() {
                errors.push("Provider reported failure without errors".to_string());
            }
            return Err(errors);
        }

        Ok(())
    }
}

#[async_trait]
impl RecordGateway for CloudflareGateway {
    async fn submit(&self, record: &RecordDescriptor) -> OperationResult {
        tracing::debug!(
            "Submitting {} record {} -> {} (zone {})",
            record.rtype,
            record.name,
            record.content,
            record.zone
        );

        let zone_id = match self.zone_id(&record.zone).await {
            Ok(id) => id,
            Err(errors) => return OperationResult::failure(record, self.provider_name(), errors),
        };

        match self.create_record(&zone_id, record).await {
            Ok(()) => OperationResult::success(record, self.provider_name()),
            Err(errors) => OperationResult::failure(record, self.provider_name(), errors),
        }
    }

    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}

/// Map an HTTP status code to a diagnosable error message
fn status_context(action: &str, status: u16) -> String {
    match status {
        401 | 403 => format!(
            "{} failed: authentication rejected (status {}); check API email/key permissions",
            action, status
        ),
        429 => format!("{} failed: rate limit exceeded (status {})", action, status),
        500..=599 => format!("{} failed: Cloudflare server error (status {})", action, status),
        _ => format!("{} failed with status {}", action, status),
    }
}

/// Collect provider-reported error messages, in the order given
fn api_errors(json: &Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| match (e["code"].as_i64(), e["message"].as_str()) {
                    (Some(code), Some(message)) => format!("code {}: {}", code, message),
                    (None, Some(message)) => message.to_string(),
                    _ => e.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Pull the first zone ID out of a zone list response
fn extract_zone_id(json: &Value, zone: &str) -> Result<String, Vec<String>> {
    let zones = json["result"]
        .as_array()
        .ok_or_else(|| vec![format!("Zone lookup for {}: result is not an array", zone)])?;

    let id = zones
        .first()
        .and_then(|z| z["id"].as_str())
        .ok_or_else(|| vec![format!("Zone lookup failed for {}: no matching zone", zone)])?;

    Ok(id.to_string())
}
