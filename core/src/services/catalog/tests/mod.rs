//! Tests for the catalog service
