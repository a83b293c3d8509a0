//! Integration tests for ledgerline-remote
//!
//! Uses wiremock to simulate the Supabase REST and storage endpoints and
//! verifies end-to-end behavior of the REST client and the fail-soft
//! `IRemoteStore` implementation.

mod common;

mod test_expenses;
mod test_health;
mod test_storage;
