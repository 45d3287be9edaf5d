//! Worker status derivation from observed pods.
//!
//! Collapses the container-level signals of a pod (waiting and terminated
//! reasons, readiness, deletion markers) into one [`WorkerStatus`].

use k8s_openapi::api::core::v1::{ContainerState, Pod};
use kube::ResourceExt;
use loadbalancer_core::{split_namespace_and_name, QualifiedName, Result};
use tracing::trace;

use crate::types::{WorkerStatus, WorkerStatusSet};

/// Reason set on a pod whose node stopped reporting to the control plane.
pub const NODE_UNREACHABLE_POD_REASON: &str = "NodeLost";

/// Label carrying the owning load balancer as `namespace.name`.
pub const LOADBALANCER_LABEL: &str = "loadbalance.caicloud.io/loadbalancer";

/// Derive the summarized status of a worker pod.
///
/// Container statuses are scanned in the order they are reported and the
/// last container with a waiting or terminated reason decides `reason`.
/// This makes the reason depend on the reported order when several
/// containers are unhealthy at once.
///
/// A pod marked for deletion is never ready; its reason becomes `Unknown`
/// when the node is unreachable and `Terminating` otherwise.
#[must_use]
pub fn derive_worker_status(pod: &Pod) -> WorkerStatus {
    let spec = pod.spec.as_ref();
    let status = pod.status.as_ref();

    let total_containers = spec.map_or(0, |s| s.containers.len());
    let pod_reason = status.and_then(|s| s.reason.as_deref()).unwrap_or_default();

    let mut reason = status.and_then(|s| s.phase.clone()).unwrap_or_default();
    if !pod_reason.is_empty() {
        reason = pod_reason.to_string();
    }

    let mut restarts: i64 = 0;
    let mut ready_containers: usize = 0;

    let container_statuses = status
        .and_then(|s| s.container_statuses.as_ref())
        .into_iter()
        .flatten();

    for container in container_statuses {
        restarts += i64::from(container.restart_count);

        let state = container.state.as_ref();
        if let Some(container_reason) = state.and_then(container_state_reason) {
            reason = container_reason;
        } else if container.ready && state.is_some_and(|s| s.running.is_some()) {
            ready_containers += 1;
        }
    }

    let ready_containers = ready_containers.min(total_containers);
    let mut ready = ready_containers == total_containers;

    if pod.metadata.deletion_timestamp.is_some() {
        ready = false;
        reason = if pod_reason == NODE_UNREACHABLE_POD_REASON {
            "Unknown".to_string()
        } else {
            "Terminating".to_string()
        };
    }

    let name = pod.metadata.name.clone().unwrap_or_default();
    trace!(pod = %name, ready, reason = %reason, restarts, "Derived worker status");

    WorkerStatus {
        name,
        ready,
        node_name: spec.and_then(|s| s.node_name.clone()).unwrap_or_default(),
        ready_containers: saturating_i32(ready_containers),
        total_containers: saturating_i32(total_containers),
        reason,
    }
}

/// Reason reported by a waiting or terminated container, if any.
fn container_state_reason(state: &ContainerState) -> Option<String> {
    if let Some(reason) = state
        .waiting
        .as_ref()
        .and_then(|w| non_empty(w.reason.as_deref()))
    {
        return Some(reason.to_string());
    }

    let terminated = state.terminated.as_ref()?;
    if let Some(reason) = non_empty(terminated.reason.as_deref()) {
        return Some(reason.to_string());
    }

    match terminated.signal {
        Some(signal) if signal != 0 => Some(format!("Signal:{signal}")),
        _ => Some(format!("ExitCode:{}", terminated.exit_code)),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn saturating_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl WorkerStatusSet {
    /// Derive every pod and assemble the set, sorted by name.
    ///
    /// `total_replicas` and `ready_replicas` are counted from the derived
    /// statuses.
    #[must_use]
    pub fn from_pods<'a>(replicas: i32, pods: impl IntoIterator<Item = &'a Pod>) -> Self {
        let statuses: Vec<WorkerStatus> = pods.into_iter().map(derive_worker_status).collect();
        let ready = statuses.iter().filter(|s| s.ready).count();

        let mut set = Self {
            replicas,
            total_replicas: saturating_i32(statuses.len()),
            ready_replicas: saturating_i32(ready),
            statuses,
        };
        set.sort_by_name();
        set
    }
}

/// Decode the load balancer that owns a pod from its labels.
///
/// Returns `Ok(None)` when the pod carries no owner label.
///
/// # Errors
///
/// Returns `MalformedIdentifier` if the label value is not `namespace.name`.
pub fn pod_owner(pod: &Pod) -> Result<Option<QualifiedName>> {
    pod.labels()
        .get(LOADBALANCER_LABEL)
        .map(|value| split_namespace_and_name(value))
        .transpose()
}
