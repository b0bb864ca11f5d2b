//! Shopfront - session and navigation shell for a storefront single-page app
//!
//! This is the library interface for Shopfront: the session store, the
//! route policy table with its authorization gate, layout selection, the
//! transient feedback channel, and the shell that orchestrates them. The
//! actual page views are external collaborators that receive the routing
//! outcome and render it.

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod layout;
pub mod routing;
pub mod session;
pub mod shell;

pub use config::Config;
pub use error::Error;
pub use feedback::FeedbackNotifier;
pub use layout::LayoutVariant;
pub use routing::{Admission, Capability, Route};
pub use session::{Session, SessionStore, UserRecord};
pub use shell::Shell;
