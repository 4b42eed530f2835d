//! Background Tasks Module
//!
//! # Tasks
//! - Expired-entry purge: physically removes elapsed in-memory entries

mod purge;

pub use purge::spawn_purge_task;
