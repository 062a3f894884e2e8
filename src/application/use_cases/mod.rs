/// Use cases module containing application business logic orchestration
mod configure_build;
mod load_candidates;

pub use configure_build::ConfigureBuildUseCase;
pub use load_candidates::LoadCandidatesUseCase;
