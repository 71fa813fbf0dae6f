
pub mod avl;

pub mod cli;

pub mod errors;

pub mod input;

#[cfg(feature = "order-generator")]
pub mod order_generator;
