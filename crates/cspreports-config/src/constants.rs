/// Days subtracted from the start of today when no limit is given.
pub const DEFAULT_OFFSET_DAYS: i64 = 7;

pub const DEFAULT_USE_TZ: bool = true;
pub const DEFAULT_TIME_ZONE: &str = "UTC";

pub const DEFAULT_VERBOSITY: u8 = 1;

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const USE_TZ_ENV: &str = "USE_TZ";
pub const TIME_ZONE_ENV: &str = "TIME_ZONE";
