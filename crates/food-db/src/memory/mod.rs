//! In-memory repositories
//!
//! Process-local implementations of the food-core repository traits. They
//! back the service tests, the HTTP integration tests, and the
//! `STORE_BACKEND=memory` demo mode. Every write that reaches the store is
//! recorded, and reads or writes can be made to fail on demand.

mod faults;
mod food_post;
mod profile;

pub use faults::FaultInjection;
pub use food_post::{InMemoryFoodPostRepository, StoreWrite};
pub use profile::InMemoryProfileRepository;
