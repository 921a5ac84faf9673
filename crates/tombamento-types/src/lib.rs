//! Tombamento Types - Pure type definitions
//!
//! Records, the store aggregate and the HTTP response shapes shared by the
//! server and its tests. Nothing in here touches the filesystem or an async
//! runtime.

pub mod api;
pub mod detalhe;
pub mod error;
pub mod store;
pub mod tombamento;

pub use api::*;
pub use detalhe::*;
pub use error::*;
pub use store::*;
pub use tombamento::*;
