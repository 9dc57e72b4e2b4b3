//! Integration tests for Layer 1: Engine
//!
//! Tests for reflection, rule precedence, substitution, and the DOCTOR script.

mod doctor;
mod responder;
