//! Store-opening helpers

use tm_infra::persistence::FileDispatchRepository;
use tm_types::Result;

use crate::config::Config;

/// Open the dispatch store under the configured store directory
pub fn open_dispatch_store(config: &Config) -> Result<FileDispatchRepository> {
    FileDispatchRepository::open(config.store_dir()?)
}
