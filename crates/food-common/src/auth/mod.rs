//! Authentication utilities

mod jwt;

pub use jwt::{Claims, JwtService, AUTHENTICATED_AUDIENCE};
