//! Workspace-level integration tests for fibstats. See `tests/`.
