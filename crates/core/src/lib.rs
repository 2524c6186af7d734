pub mod config;
pub mod domain;
pub mod errors;
pub mod items;
pub mod numbering;
pub mod session;

pub use domain::client::{Client, ClientDirectory, ClientDraft, ClientId};
pub use domain::quote::{LineItem, Quote, QuoteNumber, QuotePayload};
pub use errors::{ActionError, AuthError, SelectionError, StoreError};
pub use items::{ItemField, LineItemStore, RemoveOutcome};
pub use numbering::{QuoteNumberAllocator, SequentialAllocator};
pub use session::{Session, User};
