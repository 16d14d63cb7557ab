#![allow(missing_docs)]

pub mod login;
pub mod session;
pub mod store;

pub use login::{AuthError, HashAuthenticator, Login};
pub use session::{MemorySession, SessionStore, SessionStoreExt};
pub use store::{FileStore, StoreError};
