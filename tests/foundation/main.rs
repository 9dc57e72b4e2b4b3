//! Integration tests for Layer 0: Foundation
//!
//! Tests for error construction and display.

mod errors;
