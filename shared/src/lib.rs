//! Shared types for the church secretariat system
//!
//! Entity models, sync DTOs and small utilities used by the server crate.

pub mod models;
pub mod util;

pub use models::{
    CargoMinisterial, Church, ChurchCreate, ChurchUpdate, Endereco, EstadoCivil, Member,
    MemberCreate, MemberUpdate, Pastor,
};
