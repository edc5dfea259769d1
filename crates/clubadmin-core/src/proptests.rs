//! Property-based tests for the normalizers.
