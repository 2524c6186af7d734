pub mod gateway;
pub mod submit;

pub use gateway::ApiGateway;
pub use submit::{submit_quote, SubmitReport};
