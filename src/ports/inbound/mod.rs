/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interface that presentation adapters (e.g., CLI)
/// use to drive a build session.
pub mod build_configurator_port;

pub use build_configurator_port::BuildConfiguratorPort;
