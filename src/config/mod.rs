pub mod area;
pub mod credentials;
pub mod roster;
pub mod settings;

pub use area::{AreaSettings, HOME_REGION, get_home_cities};
pub use credentials::Credentials;
pub use roster::{TeamConfig, get_teams, load_roster};
pub use settings::{ApiSettings, AppConfig};
