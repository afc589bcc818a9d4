// src/config/consts.rs

// Net config
pub const FACILITY_URL: &str = "https://services.recwell.wisc.edu/FacilityOccupancy";
pub const USER_AGENT: &str = concat!("nick_rec/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Local store
pub const DEFAULT_DB_PATH: &str = "data.db";
pub const TABLE: &str = "OCCUPANCY";
pub const MAX_OCCUPANCY: u8 = 100;

// Charts
pub const DEFAULT_CHART_DIR: &str = "charts";
pub const CHART_TITLE: &str = "Nick Rec";

// Logging
pub const LOG_FILE: &str = "nick_rec.log";

// Env overrides (read by the binaries through clap)
pub const ENV_DB: &str = "NICK_REC_DB";
pub const ENV_URL: &str = "NICK_REC_URL";
pub const ENV_OUT: &str = "NICK_REC_OUT";
