//! HTTP transport adapter
//!
//! Exposes the session engine as the callback endpoint a USSD gateway
//! expects: a form-encoded `POST /ussd` per keystroke, answered with a
//! plain-text `CON `/`END ` body. All session semantics live in
//! `ussd_engine`; this crate only translates between HTTP and
//! [`ussd_core::InboundTurn`].

pub mod controllers;
pub mod server;

pub use server::{run, AppState};
