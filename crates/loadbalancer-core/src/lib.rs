//! Core types and utilities for the loadbalancer controller.
//!
//! This crate provides the small, dependency-light pieces shared by the
//! status crates:
//!
//! - **Identifiers**: `namespace.name` compound identifiers stored in labels
//! - **Error types**: the core error enum and `Result` alias
//! - **Naming**: random name tokens drawn from a caller-supplied source
//!
//! # Example
//!
//! ```
//! use loadbalancer_core::{split_namespace_and_name, worker_name, NamingConfig};
//!
//! let owner = split_namespace_and_name("kube-system.ingress").unwrap();
//! assert_eq!(owner.namespace, "kube-system");
//!
//! let name = worker_name(&owner.name, &NamingConfig::default(), &mut rand::rng());
//! assert!(name.starts_with("ingress-"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod ids;
pub mod naming;

pub use config::NamingConfig;
pub use error::{CoreError, Result};
pub use ids::{split_namespace_and_name, QualifiedName};
pub use naming::{random_token, worker_name};
