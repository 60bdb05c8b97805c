use super::Params;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

/// Sampling intervals accepted by the historical endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
pub enum Interval {
    // Calendar buckets
    #[strum(serialize = "yearly")]
    Yearly,
    #[strum(serialize = "monthly")]
    Monthly,
    #[strum(serialize = "weekly")]
    Weekly,
    #[strum(serialize = "daily")]
    Daily,
    #[strum(serialize = "hourly")]
    Hourly,
    // Sub-hour buckets, historical quotes only
    #[strum(serialize = "5m")]
    Minutes5,
    #[strum(serialize = "10m")]
    Minutes10,
    #[strum(serialize = "15m")]
    Minutes15,
    #[strum(serialize = "30m")]
    Minutes30,
    #[strum(serialize = "45m")]
    Minutes45,
    // Fixed windows
    #[strum(serialize = "1h")]
    Hours1,
    #[strum(serialize = "2h")]
    Hours2,
    #[strum(serialize = "3h")]
    Hours3,
    #[strum(serialize = "6h")]
    Hours6,
    #[strum(serialize = "12h")]
    Hours12,
    #[strum(serialize = "24h")]
    Hours24,
    #[strum(serialize = "1d")]
    Days1,
    #[strum(serialize = "2d")]
    Days2,
    #[strum(serialize = "3d")]
    Days3,
    #[strum(serialize = "7d")]
    Days7,
    #[strum(serialize = "14d")]
    Days14,
    #[strum(serialize = "15d")]
    Days15,
    #[strum(serialize = "30d")]
    Days30,
    #[strum(serialize = "60d")]
    Days60,
    #[strum(serialize = "90d")]
    Days90,
    #[strum(serialize = "365d")]
    Days365,
}

impl Interval {
    pub fn is_sub_hour(self) -> bool {
        matches!(
            self,
            Self::Minutes5 | Self::Minutes10 | Self::Minutes15 | Self::Minutes30 | Self::Minutes45
        )
    }
}

/// Which intervals an endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalSet {
    /// Everything, including 5m..45m buckets.
    Full,
    /// Hourly resolution and coarser.
    Coarse,
}

impl IntervalSet {
    pub fn parse(self, value: &str) -> Option<Interval> {
        let interval = Interval::from_str(value).ok()?;
        match self {
            Self::Coarse if interval.is_sub_hour() => None,
            _ => Some(interval),
        }
    }
}

/// Writes `interval` when it belongs to `set`. Anything else is dropped so
/// the API default applies.
pub fn apply_interval(params: &mut Params, interval: Option<&str>, set: IntervalSet) {
    let Some(raw) = interval else { return };

    match set.parse(raw) {
        Some(interval) => {
            let value: &'static str = interval.into();
            params.insert("interval".to_string(), value.to_string());
        }
        None => debug!(interval = raw, ?set, "dropping unsupported interval"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_full_set_size() {
        assert_eq!(Interval::iter().count(), 26);
        assert_eq!(Interval::iter().filter(|i| i.is_sub_hour()).count(), 5);
    }

    #[test]
    fn test_full_accepts_sub_hour() {
        assert_eq!(IntervalSet::Full.parse("5m"), Some(Interval::Minutes5));
        assert_eq!(IntervalSet::Full.parse("45m"), Some(Interval::Minutes45));
    }

    #[test]
    fn test_coarse_rejects_sub_hour() {
        assert_eq!(IntervalSet::Coarse.parse("15m"), None);
        assert_eq!(IntervalSet::Coarse.parse("1h"), Some(Interval::Hours1));
        assert_eq!(IntervalSet::Coarse.parse("weekly"), Some(Interval::Weekly));
        assert_eq!(IntervalSet::Coarse.parse("365d"), Some(Interval::Days365));
    }

    #[test]
    fn test_invalid_interval_is_dropped() {
        let mut params = Params::new();
        apply_interval(&mut params, Some("99x"), IntervalSet::Full);
        assert!(!params.contains_key("interval"));
    }

    #[test]
    fn test_sub_hour_dropped_in_coarse_mode() {
        let mut params = Params::new();
        apply_interval(&mut params, Some("30m"), IntervalSet::Coarse);
        assert!(params.is_empty());

        apply_interval(&mut params, Some("30m"), IntervalSet::Full);
        assert_eq!(params["interval"], "30m");
    }

    #[test]
    fn test_absent_interval() {
        let mut params = Params::new();
        apply_interval(&mut params, None, IntervalSet::Full);
        assert!(params.is_empty());
    }
}
