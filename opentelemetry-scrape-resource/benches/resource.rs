use criterion::{criterion_group, criterion_main, Criterion};
use opentelemetry_scrape_resource::{build_resource, DiscoveryLabels};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let plain: DiscoveryLabels = [("__scheme__", "http")].into_iter().collect();
    let pod: DiscoveryLabels = [
        ("__scheme__", "http"),
        ("__meta_kubernetes_pod_name", "my-pod-23491"),
        ("__meta_kubernetes_pod_uid", "84279wretgu89dg489q2"),
        ("__meta_kubernetes_pod_container_name", "my-container"),
        ("__meta_kubernetes_pod_node_name", "k8s-node-123"),
        ("__meta_kubernetes_pod_controller_name", "my-pod"),
        ("__meta_kubernetes_pod_controller_kind", "ReplicaSet"),
        ("__meta_kubernetes_namespace", "kube-system"),
    ]
    .into_iter()
    .collect();

    let mut group = c.benchmark_group("build_resource");
    group.bench_function("plain_target", |b| {
        b.iter(|| build_resource(black_box("job"), black_box("hostname:8888"), &plain))
    });
    group.bench_function("kubernetes_pod", |b| {
        b.iter(|| build_resource(black_box("job"), black_box("hostname:8888"), &pod))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
