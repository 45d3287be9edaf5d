//! Structural equality of aggregate statuses.
//!
//! Decides whether a newly observed status differs from the recorded one,
//! which gates the status write against the API server. Worker statuses are
//! compared as a set keyed by pod name: the list API does not guarantee a
//! stable order between polls, and a reordered but otherwise identical list
//! must not trigger a write.

use tracing::{debug, trace};

use crate::types::{ProviderStatus, ProxyStatus, WorkerStatusSet};

/// An aggregate status that embeds a [`WorkerStatusSet`].
pub trait WorkerAggregate: Clone + PartialEq {
    /// The embedded worker statuses.
    fn workers(&self) -> &WorkerStatusSet;

    /// A copy of the aggregate with an empty worker set.
    #[must_use]
    fn without_workers(&self) -> Self;
}

impl WorkerAggregate for ProxyStatus {
    fn workers(&self) -> &WorkerStatusSet {
        &self.workers
    }

    fn without_workers(&self) -> Self {
        Self {
            workers: WorkerStatusSet::default(),
            deployment: self.deployment.clone(),
            config_map: self.config_map.clone(),
            tcp_config_map: self.tcp_config_map.clone(),
            udp_config_map: self.udp_config_map.clone(),
        }
    }
}

impl WorkerAggregate for ProviderStatus {
    fn workers(&self) -> &WorkerStatusSet {
        &self.workers
    }

    fn without_workers(&self) -> Self {
        Self {
            workers: WorkerStatusSet::default(),
            deployment: self.deployment.clone(),
            vip: self.vip.clone(),
            vrid: self.vrid,
            observed_generation: self.observed_generation,
        }
    }
}

/// Check whether two aggregates are equivalent for reconciliation.
///
/// Fields outside the worker set must be equal; the worker sets are then
/// compared with [`worker_sets_equal`].
#[must_use]
pub fn status_equal<T: WorkerAggregate>(a: &T, b: &T) -> bool {
    if a.without_workers() != b.without_workers() {
        debug!("Aggregate fields changed");
        return false;
    }

    worker_sets_equal(a.workers(), b.workers())
}

/// Check whether two proxy statuses are equivalent.
#[must_use]
pub fn proxy_status_equal(a: &ProxyStatus, b: &ProxyStatus) -> bool {
    status_equal(a, b)
}

/// Check whether two provider statuses are equivalent.
#[must_use]
pub fn provider_status_equal(a: &ProviderStatus, b: &ProviderStatus) -> bool {
    status_equal(a, b)
}

/// Check whether two worker sets hold the same workers, ignoring order.
///
/// Every worker in `a` must have a worker of the same name in `b` that is
/// equal on all fields. Together with the length check this makes the sets
/// equal as long as names are unique within each set.
#[must_use]
pub fn worker_sets_equal(a: &WorkerStatusSet, b: &WorkerStatusSet) -> bool {
    if a.statuses.len() != b.statuses.len() {
        debug!(
            before = a.statuses.len(),
            after = b.statuses.len(),
            "Worker count changed"
        );
        return false;
    }

    if a.counters() != b.counters() {
        debug!("Worker set counters changed");
        return false;
    }

    a.statuses.iter().all(|left| match b.get(&left.name) {
        Some(right) if right == left => true,
        Some(_) => {
            trace!(worker = %left.name, "Worker status changed");
            false
        }
        None => {
            trace!(worker = %left.name, "Worker missing");
            false
        }
    })
}
