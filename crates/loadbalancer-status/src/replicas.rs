//! Replica count and node placement policy.

use crate::types::{NodesSpec, ReplicaPlan};

/// Resolve how many workers to run and whether to pin them to nodes.
///
/// Explicit node names always win over a declared replica count: one worker
/// runs per named node and the workers need node affinity.
#[must_use]
pub fn resolve_replicas(spec: &NodesSpec) -> ReplicaPlan {
    if spec.names.is_empty() {
        return ReplicaPlan {
            replicas: spec.replicas.unwrap_or(0),
            needs_node_affinity: false,
        };
    }

    ReplicaPlan {
        replicas: i32::try_from(spec.names.len()).unwrap_or(i32::MAX),
        needs_node_affinity: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(replicas: Option<i32>, names: &[&str]) -> NodesSpec {
        NodesSpec {
            replicas,
            names: names.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn declared_count() {
        assert_eq!(
            resolve_replicas(&spec(Some(3), &[])),
            ReplicaPlan {
                replicas: 3,
                needs_node_affinity: false
            }
        );
    }

    #[test]
    fn node_names_override_count() {
        assert_eq!(
            resolve_replicas(&spec(Some(3), &["a", "b"])),
            ReplicaPlan {
                replicas: 2,
                needs_node_affinity: true
            }
        );
    }

    #[test]
    fn node_names_without_count() {
        let plan = resolve_replicas(&spec(None, &["node-1"]));
        assert_eq!(plan.replicas, 1);
        assert!(plan.needs_node_affinity);
    }

    #[test]
    fn empty_spec_is_zero() {
        assert_eq!(resolve_replicas(&NodesSpec::default()), ReplicaPlan::default());
    }
}
