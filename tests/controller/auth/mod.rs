//! Tests for registration & login endpoints.
