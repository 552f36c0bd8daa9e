//! Account credentials: Argon2id password hashing and JWT issuance.
//!
//! Compiled only with the `auth` feature. Tokens are issued on login but no
//! route verifies them.

pub mod jwt;
pub mod password;
