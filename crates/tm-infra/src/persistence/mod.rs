//! Persistence implementations

pub mod file_dispatch_repo;

pub use file_dispatch_repo::FileDispatchRepository;
