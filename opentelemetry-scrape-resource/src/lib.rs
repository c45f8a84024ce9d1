//! Resources of Prometheus scrape targets.
//!
//! Every data point scraped from a target carries the same [`Resource`],
//! derived from the target's job name, its `instance` address and the labels
//! service discovery attached to it:
//!
//! - `service.name` and `service.instance.id` from the job and the instance;
//! - `net.host.name`, `net.host.port` and `http.scheme` from the instance
//!   address and the `__scheme__` label;
//! - `k8s.*` attributes, including the owning workload, when the target was
//!   discovered through Kubernetes service discovery.
//!
//! ```
//! use opentelemetry_scrape_resource::{build_resource, DiscoveryLabels};
//!
//! let labels: DiscoveryLabels = [
//!     ("__scheme__", "http"),
//!     ("__meta_kubernetes_pod_name", "my-pod-23491"),
//!     ("__meta_kubernetes_pod_controller_name", "my-pod"),
//!     ("__meta_kubernetes_pod_controller_kind", "DaemonSet"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let resource = build_resource("job", "hostname:8888", &labels);
//! assert_eq!(
//!     resource.get(&"k8s.daemonset.name".into()),
//!     Some("my-pod".into())
//! );
//! ```
//!
//! [`Resource`]: opentelemetry_sdk::Resource
mod address;
mod config;
mod error;
mod k8s;
mod labels;
mod resource;

pub use address::TargetAddress;
pub use config::{Config, PrometheusConfig, ScrapeJobConfig};
pub use error::{ConfigError, ConfigResult};
pub use k8s::{k8s_attributes, ControllerKind};
pub use labels::{
    DiscoveryLabels, K8S_ENDPOINT_NODE_NAME_LABEL, K8S_NAMESPACE_LABEL, K8S_NODE_NAME_LABEL,
    K8S_POD_CONTAINER_NAME_LABEL, K8S_POD_CONTROLLER_KIND_LABEL, K8S_POD_CONTROLLER_NAME_LABEL,
    K8S_POD_NAME_LABEL, K8S_POD_NODE_NAME_LABEL, K8S_POD_UID_LABEL, SCHEME_LABEL,
};
pub use resource::{
    build_resource, ScrapeTarget, ScrapeTargetResourceDetector, HTTP_SCHEME, NET_HOST_NAME,
    NET_HOST_PORT,
};
