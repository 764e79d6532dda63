//! Cart workflow: backend seam, session token store, and the mutation
//! façade the UI layer calls.
//!
//! The façade is the only place that knows the business rules "quantity
//! zero means removal" and "line absent means insertion"; the backend trait
//! underneath is a thin mirror of the repository primitives so tests can
//! count exactly which mutations a UI intent produced.

mod actions;
mod backend;
mod session;

pub mod mock;

pub use actions::{CartActionError, CartActions, CheckoutRedirect};
pub use backend::CartBackend;
pub use session::{MemoryTokenStore, TokenStore};
