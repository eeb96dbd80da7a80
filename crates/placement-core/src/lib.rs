//! Placement Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Placement
//! parser and sorter. It includes:
//!
//! - **Keys**: Shared, immutable element keys ([`key::Key`])
//! - **Directives**: Parsed position directives ([`directive::PositionDirective`])

pub mod directive;
pub mod key;
