use std::sync::OnceLock;

use regex::Regex;

use crate::error::RuleError;
use crate::rule::{Rate, RuleSet};

/// Textual encoding of a [`RuleSet`].
pub trait RuleCodec {
    fn encode(&self, rule: &RuleSet) -> String;
    fn decode(&self, value: &str) -> Result<RuleSet, RuleError>;
}

/// The `B3/S23` notation: birth counts after `B`, survival counts after `S`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthSurvival;

/// The `23/3` notation: survival counts, a slash, then birth counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurvivalBirth;

fn birth_survival_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[Bb]([0-9,]*)/?[Ss]([0-9,]*)$").expect("valid rulestring regex")
    })
}

fn survival_birth_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9,]*)/([0-9,]*)$").expect("valid rulestring regex")
    })
}

/// Writes the counts of a rate.
///
/// Counts are packed as single digits when they all fit, since that is how
/// rulestrings are normally written. Otherwise they are comma separated, with
/// a trailing comma after a lone count so `12,` never reads back as `1` and `2`.
fn encode_rate(rate: &Rate) -> String {
    let digits = rate.max().is_none_or(|max| max < 10);
    let counts = rate.iter().map(|count| count.to_string());
    if digits {
        return counts.collect();
    }

    let mut encoded = counts.collect::<Vec<_>>().join(",");
    if !encoded.contains(',') {
        encoded.push(',');
    }
    encoded
}

fn decode_rate(counts: &str) -> Result<Rate, RuleError> {
    if counts.contains(',') {
        let counts = counts.strip_suffix(',').unwrap_or(counts);
        counts
            .split(',')
            .map(|count| {
                count
                    .parse::<usize>()
                    .map_err(|_| RuleError::InvalidCount(count.to_owned()))
            })
            .collect()
    } else {
        counts
            .chars()
            .map(|digit| {
                digit
                    .to_digit(10)
                    .map(|count| count as usize)
                    .ok_or_else(|| RuleError::InvalidCount(digit.to_string()))
            })
            .collect()
    }
}

fn decode_with(re: &Regex, value: &str, birth_group: usize) -> Result<RuleSet, RuleError> {
    let trimmed = value.trim();
    let captures = re
        .captures(trimmed)
        .ok_or_else(|| RuleError::Malformed(value.to_owned()))?;
    let survival_group = 3 - birth_group;

    let birth = decode_rate(&captures[birth_group])?;
    let death = decode_rate(&captures[survival_group])?;
    let rule = RuleSet::new(birth.iter(), death.iter());
    log::debug!("decoded rulestring {trimmed:?} as {rule}");
    Ok(rule)
}

impl RuleCodec for BirthSurvival {
    fn encode(&self, rule: &RuleSet) -> String {
        format!(
            "B{}/S{}",
            encode_rate(rule.birth_rate()),
            encode_rate(rule.death_rate())
        )
    }

    fn decode(&self, value: &str) -> Result<RuleSet, RuleError> {
        decode_with(birth_survival_regex(), value, 1)
    }
}

impl RuleCodec for SurvivalBirth {
    fn encode(&self, rule: &RuleSet) -> String {
        format!(
            "{}/{}",
            encode_rate(rule.death_rate()),
            encode_rate(rule.birth_rate())
        )
    }

    fn decode(&self, value: &str) -> Result<RuleSet, RuleError> {
        decode_with(survival_birth_regex(), value, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_presets() {
        assert_eq!(BirthSurvival.encode(&RuleSet::conway()), "B3/S23");
        assert_eq!(SurvivalBirth.encode(&RuleSet::conway()), "23/3");
        assert_eq!(BirthSurvival.encode(&RuleSet::high_life()), "B36/S23");
        assert_eq!(SurvivalBirth.encode(&RuleSet::seeds()), "/2");
    }

    #[test]
    fn decodes_case_and_slash_variants() {
        for value in ["B3/S23", "b3s23", "B3S23", " B3/S23\n"] {
            assert_eq!(BirthSurvival.decode(value), Ok(RuleSet::conway()), "{value}");
        }
        assert_eq!(SurvivalBirth.decode("23/3"), Ok(RuleSet::conway()));
    }

    #[test]
    fn wide_counts_use_commas() {
        let rule = RuleSet::new([3, 12], [2, 3]);
        let encoded = BirthSurvival.encode(&rule);

        assert_eq!(encoded, "B3,12/S23");
        assert_eq!(BirthSurvival.decode(&encoded), Ok(rule));
    }

    #[test]
    fn lone_wide_count_keeps_its_comma() {
        let rule = RuleSet::new([12], []);
        let encoded = SurvivalBirth.encode(&rule);

        assert_eq!(encoded, "/12,");
        assert_eq!(SurvivalBirth.decode(&encoded), Ok(rule));
        assert_eq!(
            BirthSurvival.decode("B12/S"),
            Ok(RuleSet::new([1, 2], []))
        );
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(
            BirthSurvival.decode("23/3"),
            Err(RuleError::Malformed("23/3".to_owned()))
        );
        assert_eq!(
            SurvivalBirth.decode("B3/S23"),
            Err(RuleError::Malformed("B3/S23".to_owned()))
        );
        assert_eq!(
            BirthSurvival.decode("B3,,4/S2"),
            Err(RuleError::InvalidCount(String::new()))
        );
    }
}
