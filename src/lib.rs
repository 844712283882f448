//! Fatigue risk and working-time compliance engine for rail rostering.
//!
//! This crate scores shift sequences with an HSE RR446-style Fatigue Risk
//! Index (FRI) and Fatigue Growth Index (FGI), and checks an employee's
//! assignment history against rest, weekly-hours, consecutive-day and
//! consecutive-night limits.
//!
//! Both entry points are pure functions over in-memory records:
//! [`fatigue::evaluate`] and [`compliance::check_compliance`].

#![warn(missing_docs)]

pub mod api;
pub mod compliance;
pub mod config;
pub mod duty_time;
pub mod error;
pub mod fatigue;
pub mod models;
pub mod resolution;
