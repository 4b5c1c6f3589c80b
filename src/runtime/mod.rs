pub mod check;
pub mod executor;
pub mod probe;
