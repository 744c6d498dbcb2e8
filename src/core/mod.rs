//! # Core Application Logic
//!
//! This module contains Vestenet's business logic.
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
//!                    │  • validation rules     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`form`]: Field storage for the active screen
//! - [`validation`]: The login/registration rule sets and the CPF mask
//! - [`screen`]: Screen identifiers, used as navigation intents
//! - [`catalog`]: The storefront inventory
//! - [`config`]: Settings with defaults → file → env → CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod form;
pub mod screen;
pub mod state;
pub mod validation;
