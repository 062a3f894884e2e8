/// Result type used at every fallible boundary (catalog, cart, config, output).
///
/// Typed failures are `ConfiguratorError` values carried inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
