//! Ledgerline Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `Expense`, `ExpenseId`, `Category`, `Receipt`, `MonthlySummary`
//! - **Port definitions** - Traits for adapters: `IRemoteStore`, `IExpenseCache`, `IConnectivityMonitor`
//! - **Configuration** - Typed YAML configuration with defaults and validation
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure business logic with no external dependencies.
//! Ports define trait interfaces that adapter crates implement. The sync engine
//! in `ledgerline-sync` orchestrates domain entities through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
