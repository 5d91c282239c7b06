mod commit;
mod sync;

pub use sync::{SyncOptions, run_sync};
