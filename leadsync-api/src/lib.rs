//! # leadsync-api
//!
//! Blocking HTTP clients for the two remote systems, built on `ureq`:
//! [`BisonClient`] implements the paginated listing seam and [`StoreClient`]
//! the hosted REST store. Every call goes through one [`RetryPolicy`].

pub mod bison;
mod http;
pub mod retry;
pub mod store;

pub use bison::BisonClient;
pub use retry::RetryPolicy;
pub use store::StoreClient;
