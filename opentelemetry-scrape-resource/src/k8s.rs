//! Kubernetes workload identity
//!
//! Maps the Kubernetes service discovery meta labels of a target onto the
//! `k8s.*` resource attributes, including the name of the controller that
//! owns the scraped pod.
use opentelemetry::{otel_debug, KeyValue};
use opentelemetry_semantic_conventions::attribute as semconv;

use crate::labels::{
    DiscoveryLabels, K8S_ENDPOINT_NODE_NAME_LABEL, K8S_NAMESPACE_LABEL,
    K8S_NODE_NAME_LABEL, K8S_POD_CONTAINER_NAME_LABEL, K8S_POD_CONTROLLER_KIND_LABEL,
    K8S_POD_CONTROLLER_NAME_LABEL, K8S_POD_NAME_LABEL, K8S_POD_NODE_NAME_LABEL,
    K8S_POD_UID_LABEL,
};

/// Kind of the controller owning a pod, as reported by
/// `__meta_kubernetes_pod_controller_kind`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerKind {
    ReplicaSet,
    DaemonSet,
    StatefulSet,
    Job,
    CronJob,
    /// Any other kind. It has no resource attribute.
    Unrecognized(String),
}

impl ControllerKind {
    /// Match a controller kind. Matching is exact and case-sensitive.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "ReplicaSet" => ControllerKind::ReplicaSet,
            "DaemonSet" => ControllerKind::DaemonSet,
            "StatefulSet" => ControllerKind::StatefulSet,
            "Job" => ControllerKind::Job,
            "CronJob" => ControllerKind::CronJob,
            other => ControllerKind::Unrecognized(other.to_string()),
        }
    }

    /// Resource attribute holding the name of a controller of this kind.
    pub fn name_key(&self) -> Option<&'static str> {
        match self {
            ControllerKind::ReplicaSet => Some(semconv::K8S_REPLICASET_NAME),
            ControllerKind::DaemonSet => Some(semconv::K8S_DAEMONSET_NAME),
            ControllerKind::StatefulSet => Some(semconv::K8S_STATEFULSET_NAME),
            ControllerKind::Job => Some(semconv::K8S_JOB_NAME),
            ControllerKind::CronJob => Some(semconv::K8S_CRONJOB_NAME),
            ControllerKind::Unrecognized(_) => None,
        }
    }
}

/// Kubernetes resource attributes for a target.
///
/// - Pod targets get the pod name, UID, container, namespace, node and the
///   owning controller, each one only when its label is present. The node
///   comes from the pod node label, or else the node label.
/// - Node and endpoint targets without a pod only get `k8s.node.name`.
/// - Targets without Kubernetes labels get nothing.
pub fn k8s_attributes(labels: &DiscoveryLabels) -> Vec<KeyValue> {
    let copy = |label: &str, key: &'static str| {
        labels
            .get(label)
            .map(|value| KeyValue::new(key, value.to_string()))
    };

    if !labels.contains(K8S_POD_NAME_LABEL) {
        return node_attribute(labels, &[K8S_NODE_NAME_LABEL, K8S_ENDPOINT_NODE_NAME_LABEL])
            .into_iter()
            .collect();
    }

    [
        copy(K8S_POD_NAME_LABEL, semconv::K8S_POD_NAME),
        copy(K8S_POD_UID_LABEL, semconv::K8S_POD_UID),
        copy(K8S_POD_CONTAINER_NAME_LABEL, semconv::K8S_CONTAINER_NAME),
        node_attribute(labels, &[K8S_POD_NODE_NAME_LABEL, K8S_NODE_NAME_LABEL]),
        copy(K8S_NAMESPACE_LABEL, semconv::K8S_NAMESPACE_NAME),
        owner_attribute(labels),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// `k8s.node.name` from the first of `sources` that is set.
fn node_attribute(labels: &DiscoveryLabels, sources: &[&str]) -> Option<KeyValue> {
    sources
        .iter()
        .find_map(|label| labels.get(label))
        .map(|node| KeyValue::new(semconv::K8S_NODE_NAME, node.to_string()))
}

fn owner_attribute(labels: &DiscoveryLabels) -> Option<KeyValue> {
    let name = labels.get(K8S_POD_CONTROLLER_NAME_LABEL)?;
    let kind = labels.get(K8S_POD_CONTROLLER_KIND_LABEL)?;

    let Some(key) = ControllerKind::parse(kind).name_key() else {
        otel_debug!(
            name: "ScrapeResource.UnrecognizedControllerKind",
            controller_name = name,
            controller_kind = kind
        );
        return None;
    };
    Some(KeyValue::new(key, name.to_string()))
}
