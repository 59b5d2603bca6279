//! Crowd-aware metro route planner.
//!
//! A web service that finds routes through a line-expanded transit graph,
//! trading off trip length, crowding and line changes under a single
//! comfort dial.

pub mod affluence;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
