//! Discovery labels
//!
//! Labels attached to a scrape target by service discovery, before relabeling
//! drops the internal `__`-prefixed ones.
use std::collections::{BTreeMap, HashMap};

/// Scheme the target is scraped with.
pub const SCHEME_LABEL: &str = "__scheme__";

// Kubernetes service discovery meta labels.
pub const K8S_POD_NAME_LABEL: &str = "__meta_kubernetes_pod_name";
pub const K8S_POD_UID_LABEL: &str = "__meta_kubernetes_pod_uid";
pub const K8S_POD_CONTAINER_NAME_LABEL: &str = "__meta_kubernetes_pod_container_name";
pub const K8S_POD_NODE_NAME_LABEL: &str = "__meta_kubernetes_pod_node_name";
pub const K8S_POD_CONTROLLER_NAME_LABEL: &str = "__meta_kubernetes_pod_controller_name";
pub const K8S_POD_CONTROLLER_KIND_LABEL: &str = "__meta_kubernetes_pod_controller_kind";
pub const K8S_NAMESPACE_LABEL: &str = "__meta_kubernetes_namespace";
pub const K8S_NODE_NAME_LABEL: &str = "__meta_kubernetes_node_name";
pub const K8S_ENDPOINT_NODE_NAME_LABEL: &str = "__meta_kubernetes_endpoint_node_name";

/// The set of labels known about a target at discovery time.
///
/// Keys are unique and kept sorted so that two label sets with the same
/// content compare and print identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscoveryLabels {
    labels: BTreeMap<String, String>,
}

impl DiscoveryLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the label `name`, if discovery set it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.contains_key(name)
    }

    /// The `__scheme__` label, or the empty string when discovery did not set one.
    pub fn scheme(&self) -> &str {
        self.get(SCHEME_LABEL).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for DiscoveryLabels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for DiscoveryLabels {
    fn from(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }
}

impl From<HashMap<String, String>> for DiscoveryLabels {
    fn from(labels: HashMap<String, String>) -> Self {
        labels.into_iter().collect()
    }
}
