//! # Core Application Logic
//!
//! This module contains the business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    API     │
//!           │  Adapter   │              │  Sources   │
//!           │ (ratatui)  │              │ (reqwest)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct holding all application state
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`experience`]: Record types shared with the API layer
//! - [`filter`]: Company/verdict filters and their option lists
//! - [`expansion`]: Per-record expand/collapse flags
//! - [`config`]: Config file + env + CLI resolution
//! - [`seed`]: Built-in sample records

pub mod action;
pub mod config;
pub mod expansion;
pub mod experience;
pub mod filter;
pub mod seed;
pub mod state;
