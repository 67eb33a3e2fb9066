//! volt_filt node: power board voltage in, temperature estimate out.
//!
//! One reader thread decodes the input topic and forwards readings over a
//! bounded channel. Everything else, including the estimator, runs on the
//! thread that calls [`VoltFiltNode::spin`].

pub mod error;
pub mod node;
pub mod params;
pub mod publisher;
pub mod topic;

pub use error::{Error, Result};
pub use node::{NodeStats, VoltFiltNode};
pub use params::NodeParams;
pub use publisher::{EstimatePublisher, LinePublisher};
pub use topic::Subscription;
