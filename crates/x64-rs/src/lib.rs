//! # x64-rs — operand sets and symbolic labels for x86-64 encoding
//!
//! `x64-rs` provides the two leaf primitives an x86-64 instruction encoder
//! builds on:
//!
//! - [`OpSet`] — a compact, algebraically composable set of operand
//!   categories, used to validate and select legal operand assignments for
//!   an instruction form.
//! - [`Label`] / [`LabelRegistry`] — interned symbolic jump/call targets,
//!   letting an assembler emit relocatable references before the final
//!   address layout is known.
//!
//! ## Quick Start
//!
//! ```rust
//! use x64_rs::{LabelRegistry, OpSet};
//!
//! // Operand-category algebra for instruction-form selection.
//! let wide_gp = OpSet::GP32 | OpSet::GP64;
//! assert!(wide_gp.contains(OpSet::GP64));
//! assert!((wide_gp & OpSet::XMM).is_empty());
//!
//! // Interned symbolic branch targets.
//! let mut labels = LabelRegistry::new();
//! let entry = labels.named("entry");
//! assert_eq!(labels.named("entry"), entry);
//! assert_eq!(labels.text(entry).unwrap(), "entry");
//! ```
//!
//! ## Features
//!
//! - **Pure Rust** — no C/C++ FFI, `#![forbid(unsafe_code)]`.
//! - **`no_std` + `alloc`** — embeddable in firmware, kernels, WASM.
//! - **Value semantics** — both primitives are cheap `Copy` data that hash
//!   and order correctly as keys in the encoder's fix-up tables.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

extern crate alloc;

/// Error types for the label registry.
pub mod error;
/// Symbolic labels and the registry that interns their names.
pub mod label;
/// Operand-category sets and their algebra.
pub mod opset;

// Re-exports
pub use error::LabelError;
pub use label::{Label, LabelId, LabelRegistry};
pub use opset::OpSet;
