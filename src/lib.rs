//! feedwatch - polls a text resource over HTTP and mirrors it into a display
//!
//! The [`poller::Poller`] fetches one fixed resource on a recurring interval
//! and writes the body verbatim into a [`display::DisplayTarget`], or a fixed
//! fallback message when the cycle fails.

pub mod cli;
pub mod config;
pub mod display;
pub mod logging;
pub mod metrics;
pub mod mirror;
pub mod poller;
