//! Status and spec types persisted on the load balancer resource.

use serde::{Deserialize, Serialize};

/// Summarized status of one worker pod.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerStatus {
    /// Pod name, unique within a [`WorkerStatusSet`].
    pub name: String,
    /// Whether every declared container is running and ready.
    pub ready: bool,
    /// Node the pod is scheduled on.
    pub node_name: String,
    /// Number of running and ready containers.
    pub ready_containers: i32,
    /// Number of containers declared in the pod spec.
    pub total_containers: i32,
    /// Most relevant reason for the pod's current state.
    pub reason: String,
}

/// The worker statuses of one aggregate, plus replica counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerStatusSet {
    /// Desired replica count.
    pub replicas: i32,
    /// Number of observed workers.
    pub total_replicas: i32,
    /// Number of observed workers that are ready.
    pub ready_replicas: i32,
    /// Per-worker statuses. Order carries no meaning.
    #[serde(default)]
    pub statuses: Vec<WorkerStatus>,
}

impl WorkerStatusSet {
    /// Sort statuses by worker name.
    pub fn sort_by_name(&mut self) {
        self.statuses.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Look up a worker status by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WorkerStatus> {
        self.statuses.iter().find(|s| s.name == name)
    }

    /// Copy of the set without per-worker statuses.
    #[must_use]
    pub fn counters(&self) -> Self {
        Self {
            replicas: self.replicas,
            total_replicas: self.total_replicas,
            ready_replicas: self.ready_replicas,
            statuses: Vec::new(),
        }
    }
}

/// Status of the proxy (ingress) side of a load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyStatus {
    /// Worker pods running the proxy.
    #[serde(default)]
    pub workers: WorkerStatusSet,
    /// Name of the proxy deployment.
    pub deployment: String,
    /// Name of the main proxy config map.
    pub config_map: String,
    /// Name of the TCP services config map.
    pub tcp_config_map: String,
    /// Name of the UDP services config map.
    pub udp_config_map: String,
}

/// Status of the provider (virtual IP) side of a load balancer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    /// Worker pods running the provider.
    #[serde(default)]
    pub workers: WorkerStatusSet,
    /// Name of the provider deployment.
    pub deployment: String,
    /// Assigned virtual IP.
    pub vip: String,
    /// Virtual router ID, once allocated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vrid: Option<i32>,
    /// Generation of the spec this status was computed from.
    pub observed_generation: i64,
}

/// Declarative placement of load balancer workers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodesSpec {
    /// Desired replica count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    /// Explicit node names. Overrides `replicas` when non-empty.
    #[serde(default)]
    pub names: Vec<String>,
}

/// Result of resolving a [`NodesSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplicaPlan {
    /// Number of workers to run.
    pub replicas: i32,
    /// Whether workers must be pinned to the named nodes.
    pub needs_node_affinity: bool,
}
