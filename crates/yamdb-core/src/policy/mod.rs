//! Authorization policy
//!
//! A single pure decision function answers "may this actor perform this
//! action on this resource?". Handlers never inspect roles directly.

mod actor;
mod rules;

pub use actor::{Actor, Principal};
pub use rules::{authorize, require, Action, Resource};
