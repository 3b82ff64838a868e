pub const SECONDS_IN_MINUTE: i64 = 60;
pub const MINUTES_IN_HOUR: i64 = 60;
pub const HOURS_IN_DAY: i64 = 24;
pub const DAYS_IN_MONTH: i64 = 30;
pub const MONTHS_IN_YEAR: i64 = 12;


pub const MINUTES_IN_DAY: i64 = HOURS_IN_DAY*MINUTES_IN_HOUR;
pub const MINUTES_IN_MONTH: i64 = DAYS_IN_MONTH*MINUTES_IN_DAY;
pub const MINUTES_IN_TWO_MONTHS: i64 = 2*MINUTES_IN_MONTH;
/// A day and three quarters, below which a distance still reads as "1 dia"
pub const MINUTES_IN_ONE_DAY_ROUNDED: i64 = 2520;
pub const TIME_AGO_REFRESH_INTERVAL_MS: u64 = 60_000;


pub const SITE_ROOT: &str = "/";
pub const PLACEHOLDER_LINK: &str = "#";
pub const LOCALE_TAG: &str = "pt-BR";


pub const LOGO_ICON_PATH: &str = "/svg/logo.svg";
