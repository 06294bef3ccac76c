//! Expense Tracker - personal expense recording and summaries
//!
//! Expenses are appended to a single CSV file (`date,category,description,amount`)
//! and aggregated on demand into category and monthly totals, dashboard
//! figures and charts. Three front ends share the same core: a CLI, a numbered
//! text menu and a ratatui dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, money and months
//! - `storage`: The append-only CSV store
//! - `services`: Business logic layer
//! - `audit`: Audit log of accepted and rejected additions
//! - `reports`: Dataset loading, summaries, dashboard stats and charts
//! - `display`: Plain-text tables and ASCII charts
//! - `export`: JSON and YAML export
//! - `cli`: Command handlers
//! - `menu`: The numbered text menu
//! - `tui`: The terminal dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use expense::config::{ExpensePaths, Settings};
//! use expense::services::ExpenseService;
//! use expense::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings);
//! let dataset = ExpenseService::new(&storage).dataset()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
