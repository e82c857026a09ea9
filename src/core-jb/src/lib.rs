pub mod common;

pub use common::db_env::{get_database_url, select_store};
pub use common::health::{HealthResponse, health_check};
pub use common::hostname::{HostPortError, get_api_base_url};
pub use common::logging::setup_logging;
pub use common::static_files::get_frontend_dir;
