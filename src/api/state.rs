use std::path::PathBuf;
use std::sync::Arc;

use crate::query::PresenceQueries;

#[derive(Clone)]
pub struct AppState {
    pub queries: PresenceQueries,
    pub static_dir: Arc<PathBuf>,
}
