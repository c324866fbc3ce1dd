//! # Smoothie order
//!
//! Order model for a smoothie customization form.
//!
//! - [`domain`] — the [`Smoothie`](domain::Smoothie) order entity with its
//!   price total, description, display markup and nutrition summary.
//! - [`controller`] — captured form state, field validation, selection
//!   ceilings and order history.
//! - [`actors`] / [`clients`] / [`messages`] — the UI boundary: form events
//!   become typed messages handled one at a time by [`actors::OrderService`].
//! - [`app_system`] — startup, shutdown and tracing setup.
//! - [`config`] — selection ceilings and the price table.

pub mod actors;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod messages;
