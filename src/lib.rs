//! touring-planner core
//!
//! Turns a snapshot of live ride wait times plus a static park topology
//! into an ordered touring route with wait and walk accounting. Live
//! data fetching and historical aggregation plug in at the seams in
//! [`traits`].

pub mod traits;
pub mod planner;
pub mod topology;
pub mod history;
pub mod parks;
pub mod queue_times;
pub mod ride;
