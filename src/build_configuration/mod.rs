/// Build configuration domain
///
/// Pure business logic: slot selection state, compatibility rules and
/// candidate ranking. Nothing in this module performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
