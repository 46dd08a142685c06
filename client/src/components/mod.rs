//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take signals and callbacks as props
//! and leave fetching and state transitions to the directory page.

pub mod person_detail_dialog;
pub mod persons_table;
pub mod search_filter;
pub mod table_pagination;
