//! # Core Application Logic
//!
//! The widget's domain logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • TodoList (model)     │
//!                    │  • App (state)          │
//!                    │  • Action / update()    │
//!                    │  • Storage (CSV file)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │            │   Quote    │
//!             │  Adapter   │            │  Provider  │
//!             │ (ratatui)  │            │ (reqwest)  │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`todo`]: `TodoList` and `Item`, the ordered checklist
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`storage`]: CSV persistence
//! - [`config`]: Compiled-in settings

pub mod action;
pub mod config;
pub mod state;
pub mod storage;
pub mod todo;
