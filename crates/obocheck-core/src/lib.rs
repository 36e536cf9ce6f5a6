pub mod config;
pub mod logging;

pub mod documentation;
pub mod probe;
pub mod record;
pub mod verdict;
