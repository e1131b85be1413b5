//! Email dispatch module for delivering contact submissions

mod client;
mod error;
mod traits;

pub use client::EmailJsClient;
pub use error::DispatchError;
pub use traits::EmailDispatcher;

#[cfg(test)]
pub use traits::MockEmailDispatcher;
