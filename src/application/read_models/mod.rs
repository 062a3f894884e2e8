//! Read models for CQRS-lite pattern
//!
//! This module contains the view-optimized structs the presentation layer
//! reads after every build mutation.

pub mod build_read_model;
pub mod build_read_model_builder;

pub use build_read_model::{BuildReadModel, ComponentView, SlotView};
pub use build_read_model_builder::BuildReadModelBuilder;
