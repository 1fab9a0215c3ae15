//! # Metadata
//!
//! Client for the Rancher metadata service.
//!
//! Resolves the stack that owns a container by listing the containers known to
//! the local metadata endpoint. Implements `contracts::MetadataLookup`; it
//! keeps no cache of its own.

mod client;
mod error;
mod model;

pub use client::{RancherMetadataClient, DEFAULT_METADATA_URL};
pub use error::MetadataError;
pub use model::RancherContainer;
