//! # client
//!
//! Rust client library for the fitness-club management backend.
//!
//! Members, coaches, and admins authenticate against the backend and drive
//! role-specific workflows (bookings, membership cards, attendance,
//! payments). This crate owns the session lifecycle — durable storage, the
//! `userId`/`id` reconciliation, the route guard — plus thin typed resource
//! clients over the backend's REST surface. Presentation is out of scope;
//! the `cli` crate is the application shell.

pub mod net;
pub mod routes;
pub mod state;
pub mod storage;
