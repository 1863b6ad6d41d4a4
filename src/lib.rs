//! # keydecoder
//!
//! Decodes the binary keys and index values a SQL layer stores in its
//! distributed key-value store:
//! - Escape decoding of keys typed as text
//! - Table row and table index key layouts
//! - The order-preserving, self-describing value codec
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DecodeConfig                              │
//! │              (format, key text, strict)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Escape    │          │   Base64    │
//!   │  (\x, \NNN) │          │  (values)   │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        │
//!   ┌─────────────┐                 │
//!   │ Key Layout  │                 │
//!   │ (t.._r/_i)  │                 │
//!   └──────┬──────┘                 │
//!          │                        │
//!          ▼                        ▼
//!   ┌─────────────────────────────────────┐
//!   │        Value Sequence Codec         │
//!   │        (tag + payload)*             │
//!   └─────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod escape;
pub mod codec;
pub mod key;
pub mod decoder;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecoderError, Result};
pub use config::{DecodeConfig, Format};
pub use decoder::{decode, detect_format, Report};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of keydecoder
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
