//! Randomized play sessions.
//!
//! # Responsibility
//! - Ask every quiz at most once, in random order.
//! - Keep the running score and end on the first miss.

pub mod session;
