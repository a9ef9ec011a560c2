//! Service layer for tally
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence and audit logging of every mutation.

pub mod category;
pub mod transaction;

pub use category::CategoryService;
pub use transaction::TransactionService;
