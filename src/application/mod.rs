/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the build configuration domain and reaches
/// the catalog, cart and terminal through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
