//! Wire layer for the Tango binary puzzle.
//!
//! Serde DTOs and transport-agnostic request/response functions for the
//! three external operations: generate, validate, and solve. HTTP/JSON is
//! one valid binding; nothing here depends on a transport.
//!
//! # Examples
//!
//! ```
//! use tango_generator::PuzzleGenerator;
//! use tango_wire::{GenerateResponse, generate_puzzle};
//!
//! let mut generator = PuzzleGenerator::with_seed(42);
//! let response = generate_puzzle(&mut generator, "easy");
//! assert!(matches!(response, GenerateResponse::Success { .. }));
//! ```

pub use self::{dto::*, ops::*};

mod dto;
mod ops;
