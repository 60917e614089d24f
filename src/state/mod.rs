//! Client-side decision logic behind the pages.
//!
//! DESIGN
//! ======
//! Split by flow (`auth`, `login`) so pages stay thin and every decision can
//! be exercised without a browser.

pub mod auth;
pub mod login;
