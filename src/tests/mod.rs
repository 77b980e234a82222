//! Unit tests for the taskboard domain and services.
