mod snapshot;
mod utils;
