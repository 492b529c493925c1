//! Session glue between database scalar functions and the cipher engine.
//!
//! The host engine exposes dbseal as scalar functions; this crate holds the
//! per-session state those functions share. A failed operation returns
//! `None` (surfaced to SQL as NULL) and parks its message in the session's
//! last-error slot for out-of-band retrieval by a separate zero-argument
//! function.

pub mod session;

pub use session::UdfSession;
