//! IDE feature tests
//!
//! Tests for:
//! - Occurrence resolution (pattern and reference strategies)
//! - Inline values end to end (cutoff, caching, suppression, cancellation)
