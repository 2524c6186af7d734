pub mod client;
pub mod quote;
