//! Colony Graph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the colony graph
//! crates. It includes:
//!
//! - **Identifiers**: Typed pin identifiers ([`identifier::PinId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Palette**: The categorical commodity palette ([`palette`] module)
//! - **Catalog**: Name and ordinal lookups ([`catalog::Catalog`])
//! - **Geometry**: Layout position hints ([`geometry`] module)
//! - **Semantic**: Normalized colony entities ([`semantic`] module)
//! - **Window**: Overlapping window iteration ([`window`] module)

pub mod catalog;
pub mod color;
pub mod geometry;
pub mod identifier;
pub mod palette;
pub mod semantic;
pub mod window;
