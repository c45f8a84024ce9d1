//! Scrape target resource
//!
//! Builds the [`Resource`] attached to every data point scraped from a target.
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::ResourceDetector;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::attribute as semconv;

use crate::address::TargetAddress;
use crate::k8s::k8s_attributes;
use crate::labels::DiscoveryLabels;

// Current semantic conventions no longer export these keys.
/// Host of the scraped instance.
pub const NET_HOST_NAME: &str = "net.host.name";
/// Port of the scraped instance.
pub const NET_HOST_PORT: &str = "net.host.port";
/// Scheme the instance is scraped with.
pub const HTTP_SCHEME: &str = "http.scheme";

/// Build the resource of the target `instance` scraped by `job`.
///
/// `service.instance.id` is always the instance verbatim, even when the
/// instance cannot be split into a host and a port. Building never fails:
/// anything that cannot be derived from the inputs is left out.
pub fn build_resource(job: &str, instance: &str, labels: &DiscoveryLabels) -> Resource {
    let address = TargetAddress::resolve(instance, labels.scheme());

    let attributes = [
        Some(KeyValue::new(semconv::SERVICE_NAME, job.to_string())),
        Some(KeyValue::new(semconv::SERVICE_INSTANCE_ID, instance.to_string())),
        address.host.map(|host| KeyValue::new(NET_HOST_NAME, host)),
        address.port.map(|port| KeyValue::new(NET_HOST_PORT, port)),
        Some(KeyValue::new(HTTP_SCHEME, address.scheme)),
    ]
    .into_iter()
    .flatten()
    .chain(k8s_attributes(labels));

    Resource::builder_empty().with_attributes(attributes).build()
}

/// A discovered scrape target: its job, instance and discovery labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeTarget {
    job: String,
    instance: String,
    labels: DiscoveryLabels,
}

impl ScrapeTarget {
    pub fn new(
        job: impl Into<String>,
        instance: impl Into<String>,
        labels: DiscoveryLabels,
    ) -> Self {
        ScrapeTarget {
            job: job.into(),
            instance: instance.into(),
            labels,
        }
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn labels(&self) -> &DiscoveryLabels {
        &self.labels
    }

    pub fn resource(&self) -> Resource {
        build_resource(&self.job, &self.instance, &self.labels)
    }
}

/// Resource detector for a single scrape target.
///
/// Lets the target resource be merged with other detectors through
/// [`Resource::builder`]:
///
/// ```
/// use opentelemetry_scrape_resource::{DiscoveryLabels, ScrapeTarget, ScrapeTargetResourceDetector};
/// use opentelemetry_sdk::Resource;
///
/// let labels: DiscoveryLabels = [("__scheme__", "http")].into_iter().collect();
/// let target = ScrapeTarget::new("node", "10.0.0.7:9100", labels);
/// let resource = Resource::builder_empty()
///     .with_detector(Box::new(ScrapeTargetResourceDetector::new(target)))
///     .build();
/// assert_eq!(resource.len(), 5);
/// ```
#[derive(Debug)]
pub struct ScrapeTargetResourceDetector {
    target: ScrapeTarget,
}

impl ScrapeTargetResourceDetector {
    pub fn new(target: ScrapeTarget) -> Self {
        ScrapeTargetResourceDetector { target }
    }
}

impl ResourceDetector for ScrapeTargetResourceDetector {
    fn detect(&self) -> Resource {
        self.target.resource()
    }
}
