//! Reader configuration, read from the environment

/// Words per minute used when `RQ_RATE` is unset or unusable (2 Hz).
pub const DEFAULT_RATE: u32 = 120;

/// Rate change applied by `+` and `-`.
pub const RATE_STEP: u32 = 10;

pub const MIN_RATE: u32 = 1;

pub const RATE_VAR: &str = "RQ_RATE";
pub const EMPHASIS_VAR: &str = "RQ_EMPHASIS";

/// Unit suffixes and their multiplier to words per minute.
const RATE_UNITS: &[(&str, u32)] = &[
    ("", 1),
    ("wpm", 1),
    ("w/m", 1),
    ("/m", 1),
    ("wpmin", 1),
    ("w/min", 1),
    ("/min", 1),
    ("wps", 60),
    ("w/s", 60),
    ("/s", 60),
    ("wpsec", 60),
    ("w/sec", 60),
    ("/sec", 60),
    ("hz", 60),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Initial words per minute
    pub rate: u32,

    /// Reverse-video highlighting of immediately repeated words
    pub emphasis: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            emphasis: true,
        }
    }
}

impl ReaderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rate = lookup(RATE_VAR)
            .map(|value| parse_rate(&value))
            .unwrap_or(DEFAULT_RATE);
        let emphasis = lookup(EMPHASIS_VAR)
            .map(|value| !is_switched_off(&value))
            .unwrap_or(true);
        Self { rate, emphasis }
    }
}

/// Parses a rate such as `300`, `300 wpm` or `5hz` into words per minute.
///
/// The value must start with a digit and be positive; spaces may separate
/// the number from its unit, and units are case-insensitive. Anything else,
/// including overflow, yields `DEFAULT_RATE`.
pub fn parse_rate(value: &str) -> u32 {
    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    if digits_end == 0 {
        return DEFAULT_RATE;
    }

    let number = match value[..digits_end].parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => return DEFAULT_RATE,
    };

    let unit = value[digits_end..].trim_start_matches(' ');
    RATE_UNITS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(unit))
        .and_then(|&(_, multiplier)| number.checked_mul(multiplier))
        .unwrap_or(DEFAULT_RATE)
}

fn is_switched_off(value: &str) -> bool {
    ["0", "off", "no", "false"]
        .iter()
        .any(|off| off.eq_ignore_ascii_case(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate_plain_number() {
        assert_eq!(parse_rate("200"), 200);
    }

    #[test]
    fn test_parse_rate_per_minute_units() {
        assert_eq!(parse_rate("200wpm"), 200);
        assert_eq!(parse_rate("150 /min"), 150);
        assert_eq!(parse_rate("90W/M"), 90);
        assert_eq!(parse_rate("75  wpmin"), 75);
    }

    #[test]
    fn test_parse_rate_per_second_units() {
        assert_eq!(parse_rate("90hz"), 5400);
        assert_eq!(parse_rate("2 wps"), 120);
        assert_eq!(parse_rate("3/sec"), 180);
        assert_eq!(parse_rate("1 HZ"), 60);
    }

    #[test]
    fn test_parse_rate_falls_back_to_default() {
        assert_eq!(parse_rate("abc"), DEFAULT_RATE);
        assert_eq!(parse_rate("-5"), DEFAULT_RATE);
        assert_eq!(parse_rate(""), DEFAULT_RATE);
        assert_eq!(parse_rate("0"), DEFAULT_RATE);
        assert_eq!(parse_rate(" 100"), DEFAULT_RATE);
        assert_eq!(parse_rate("100 furlongs"), DEFAULT_RATE);
        assert_eq!(parse_rate("100wpm "), DEFAULT_RATE);
    }

    #[test]
    fn test_parse_rate_overflow_falls_back() {
        assert_eq!(parse_rate("99999999999"), DEFAULT_RATE);
        assert_eq!(parse_rate("4000000000hz"), DEFAULT_RATE);
    }

    #[test]
    fn test_config_defaults() {
        let config = ReaderConfig::from_lookup(|_| None);
        assert_eq!(config, ReaderConfig::default());
        assert_eq!(config.rate, 120);
        assert!(config.emphasis);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ReaderConfig::from_lookup(|key| match key {
            RATE_VAR => Some("5 hz".to_string()),
            EMPHASIS_VAR => Some("Off".to_string()),
            _ => None,
        });
        assert_eq!(config.rate, 300);
        assert!(!config.emphasis);
    }

    #[test]
    fn test_emphasis_stays_on_for_other_values() {
        let config =
            ReaderConfig::from_lookup(|key| (key == EMPHASIS_VAR).then(|| "1".to_string()));
        assert!(config.emphasis);
    }
}
