//! Cart and Checkout
//!
//! The customer's open order is the cart.

mod handlers;

pub(crate) use handlers::*;
