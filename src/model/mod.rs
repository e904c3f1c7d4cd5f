//! Catalog data structures. [`Product`] implements the
//! [`ActorEntity`](actor_framework::ActorEntity) trait in [`crate::catalog_actor`].

pub mod listing;
pub mod nutrients;
pub mod product;

pub use listing::*;
pub use nutrients::*;
pub use product::*;
