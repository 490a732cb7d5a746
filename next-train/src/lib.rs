//! Next train lookup for the MBTA rapid-transit network.
//!
//! A console application that answers: "When is the next train arriving at
//! my stop?" The user picks a route, a stop and a direction; the nearest
//! upcoming predicted arrival is reported in minutes.

pub mod app;
pub mod config;
pub mod domain;
pub mod mbta;
pub mod predict;
pub mod select;
