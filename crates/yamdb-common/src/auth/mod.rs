//! Authentication utilities

mod confirmation;
mod jwt;

pub use confirmation::{
    generate_confirmation_code, hash_confirmation_code, verify_confirmation_code,
    CONFIRMATION_CODE_LENGTH,
};
pub use jwt::{Claims, JwtService};
