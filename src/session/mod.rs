//! Session state, user records and persistence

pub mod models;
pub mod storage;
pub mod store;

pub use models::{Identity, Session, StoredSession, UserRecord};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::SessionStore;
