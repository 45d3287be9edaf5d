//! Worker status derivation and comparison for the loadbalancer controller.
//!
//! This crate holds the pure decision functions the controller runs on every
//! reconciliation pass:
//!
//! - Deriving a compact [`WorkerStatus`] from each observed worker pod
//! - Assembling the statuses into a [`WorkerStatusSet`]
//! - Comparing recorded and observed aggregates to decide whether a status
//!   write is needed
//! - Resolving the replica count and node affinity from a [`NodesSpec`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Controller (external)                    │
//! └──────────────────────────────────────────────────────────┘
//!         │ pods                               │ old status
//!         ▼                                    │
//! ┌─────────────────┐    ┌─────────────────┐   │
//! │  pod::derive_   │──▶ │ WorkerStatusSet │   │
//! │  worker_status  │    │  ::from_pods    │   │
//! └─────────────────┘    └─────────────────┘   │
//!                               │ new status   │
//!                               ▼              ▼
//!                        ┌──────────────────────────┐
//!                        │  compare::status_equal   │
//!                        └──────────────────────────┘
//!                                     │
//!                                     ▼
//!                          write only if not equal
//! ```
//!
//! # Example
//!
//! ```
//! use k8s_openapi::api::core::v1::Pod;
//! use loadbalancer_status::{proxy_status_equal, ProxyStatus, WorkerStatusSet};
//!
//! let pods: Vec<Pod> = Vec::new();
//! let recorded = ProxyStatus::default();
//!
//! let observed = ProxyStatus {
//!     workers: WorkerStatusSet::from_pods(0, &pods),
//!     ..recorded.clone()
//! };
//!
//! if !proxy_status_equal(&recorded, &observed) {
//!     // issue the status update
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod pod;
pub mod replicas;
pub mod types;

pub use compare::{
    provider_status_equal, proxy_status_equal, status_equal, worker_sets_equal, WorkerAggregate,
};
pub use pod::{derive_worker_status, pod_owner, LOADBALANCER_LABEL, NODE_UNREACHABLE_POD_REASON};
pub use replicas::resolve_replicas;
pub use types::{
    NodesSpec, ProviderStatus, ProxyStatus, ReplicaPlan, WorkerStatus, WorkerStatusSet,
};

// Re-export commonly used types from dependencies for convenience
pub use loadbalancer_core::{split_namespace_and_name, CoreError, QualifiedName};
