use chrono::{DateTime, Datelike, Locale, Timelike, Utc};

use crate::constants::{
    MINUTES_IN_DAY, MINUTES_IN_HOUR, MINUTES_IN_MONTH, MINUTES_IN_ONE_DAY_ROUNDED, MINUTES_IN_TWO_MONTHS,
    MONTHS_IN_YEAR, SECONDS_IN_MINUTE,
};

pub const PUBLISH_DATE_FORMAT: &str = "%d de %B às %H:%Mh";

/// Approximate distance between two instants, bucketed the way it is read out loud
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeDistance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl TimeDistance {
    /// Computes the distance between `from` and `to`, regardless of their order
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        let (earlier, later) = match from <= to {
            true => (from, to),
            false => (to, from),
        };
        let seconds = later.signed_duration_since(earlier).num_seconds();
        let minutes = div_round(seconds, SECONDS_IN_MINUTE);

        match minutes {
            0 => TimeDistance::LessThanAMinute,
            minutes if minutes < 45 => TimeDistance::Minutes(minutes),
            minutes if minutes < 90 => TimeDistance::AboutHours(1),
            minutes if minutes < MINUTES_IN_DAY => TimeDistance::AboutHours(div_round(minutes, MINUTES_IN_HOUR)),
            minutes if minutes < MINUTES_IN_ONE_DAY_ROUNDED => TimeDistance::Days(1),
            minutes if minutes < MINUTES_IN_MONTH => TimeDistance::Days(div_round(minutes, MINUTES_IN_DAY)),
            minutes if minutes < MINUTES_IN_TWO_MONTHS => TimeDistance::AboutMonths(div_round(minutes, MINUTES_IN_MONTH)),
            minutes => {
                let months = calendar_months_between(earlier, later);
                if months < MONTHS_IN_YEAR {
                    TimeDistance::Months(div_round(minutes, MINUTES_IN_MONTH))
                } else {
                    let years = months / MONTHS_IN_YEAR;
                    match months % MONTHS_IN_YEAR {
                        remainder if remainder < 3 => TimeDistance::AboutYears(years),
                        remainder if remainder < 9 => TimeDistance::OverYears(years),
                        _ => TimeDistance::AlmostYears(years + 1),
                    }
                }
            }
        }
    }

    /// Renders the distance in Brazilian Portuguese, without prefix
    pub fn to_pt_br(&self) -> String {
        match *self {
            TimeDistance::LessThanAMinute => String::from("menos de um minuto"),
            TimeDistance::Minutes(count) => pluralize(count, "1 minuto", "minutos"),
            TimeDistance::AboutHours(count) => format!("cerca de {}", pluralize(count, "1 hora", "horas")),
            TimeDistance::Days(count) => pluralize(count, "1 dia", "dias"),
            TimeDistance::AboutMonths(count) => format!("cerca de {}", pluralize(count, "1 mês", "meses")),
            TimeDistance::Months(count) => pluralize(count, "1 mês", "meses"),
            TimeDistance::AboutYears(count) => format!("cerca de {}", pluralize(count, "1 ano", "anos")),
            TimeDistance::OverYears(count) => format!("mais de {}", pluralize(count, "1 ano", "anos")),
            TimeDistance::AlmostYears(count) => format!("quase {}", pluralize(count, "1 ano", "anos")),
        }
    }
}

/// Formats a timestamp as an absolute date such as `29 de junho às 15:18h`
pub fn format_publish_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format_localized(PUBLISH_DATE_FORMAT, Locale::pt_BR).to_string()
}

/// Formats the distance between `timestamp` and `now` with a suffix, e.g. `há cerca de 1 hora` or `em 3 dias`
pub fn format_distance_to_now(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let distance = TimeDistance::between(timestamp, now).to_pt_br();
    match timestamp > now {
        true => format!("em {distance}"),
        false => format!("há {distance}"),
    }
}

fn pluralize(count: i64, singular: &str, plural_unit: &str) -> String {
    match count {
        1 => String::from(singular),
        _ => format!("{count} {plural_unit}"),
    }
}

fn div_round(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

/// Number of full calendar months between `earlier` and `later`
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (later.year() - earlier.year()) as i64 * MONTHS_IN_YEAR
        + later.month() as i64
        - earlier.month() as i64;
    let later_in_month = (later.day(), later.num_seconds_from_midnight());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_in_month < earlier_in_month {
        months -= 1;
    }
    months
}
