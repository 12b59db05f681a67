//! Core library for a multi-tenant home-removal platform: booking intake and
//! pricing, the job record store, the vehicle/crew auto-quote engine, and the
//! tenant directory, together with the HTTP boundary that exposes them.

pub mod autoquote;
pub mod bookings;
pub mod business;
pub mod config;
pub mod error;
pub mod telemetry;
