//! Named character domains and random string generation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::source::UniformSource;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const HEX_DIGITS: &str = "0123456789abcdef";
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Named character pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetPattern {
    #[default]
    Alphanumeric,
    Alpha,
    Numeric,
    Lowercase,
    Uppercase,
    Hex,
    Symbols,
    AlphanumericSymbols,
}

impl CharsetPattern {
    pub const ALL: [CharsetPattern; 8] = [
        Self::Alphanumeric,
        Self::Alpha,
        Self::Numeric,
        Self::Lowercase,
        Self::Uppercase,
        Self::Hex,
        Self::Symbols,
        Self::AlphanumericSymbols,
    ];

    /// Resolve a pattern name; unknown names fall back to `Alphanumeric`
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphanumeric" => Self::Alphanumeric,
            "alpha" => Self::Alpha,
            "numeric" => Self::Numeric,
            "lowercase" => Self::Lowercase,
            "uppercase" => Self::Uppercase,
            "hex" => Self::Hex,
            "symbols" => Self::Symbols,
            "alphanumeric_symbols" => Self::AlphanumericSymbols,
            other => {
                log::warn!("Unknown pattern '{}', using alphanumeric", other);
                Self::Alphanumeric
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Alpha => "alpha",
            Self::Numeric => "numeric",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Hex => "hex",
            Self::Symbols => "symbols",
            Self::AlphanumericSymbols => "alphanumeric_symbols",
        }
    }

    /// Base character sequence, in canonical order
    pub fn base_chars(&self) -> String {
        match self {
            Self::Alphanumeric => [LOWERCASE, UPPERCASE, DIGITS].concat(),
            Self::Alpha => [LOWERCASE, UPPERCASE].concat(),
            Self::Numeric => DIGITS.to_string(),
            Self::Lowercase => LOWERCASE.to_string(),
            Self::Uppercase => UPPERCASE.to_string(),
            Self::Hex => HEX_DIGITS.to_string(),
            Self::Symbols => PUNCTUATION.to_string(),
            Self::AlphanumericSymbols => [LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION].concat(),
        }
    }
}

impl FromStr for CharsetPattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for CharsetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, deduplicated character domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetDomain {
    chars: Vec<char>,
}

impl CharsetDomain {
    /// Domain from arbitrary characters, keeping first occurrences
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut seen = Vec::new();
        for c in chars {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        Self { chars: seen }
    }

    /// Resolve `pattern` and remove every character in `exclude`
    pub fn build(pattern: CharsetPattern, exclude: &str) -> GenResult<Self> {
        let domain = Self::from_chars(pattern.base_chars().chars().filter(|c| !exclude.contains(*c)));
        if domain.is_empty() {
            return Err(GenError::EmptyDomain);
        }
        Ok(domain)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// One uniformly drawn character. The domain must not be empty.
    pub fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> char {
        self.chars[source.index(self.chars.len())]
    }

    /// `length` characters drawn with replacement
    pub fn draw_string<S: UniformSource + ?Sized>(&self, source: &mut S, length: usize) -> String {
        (0..length).map(|_| self.draw(source)).collect()
    }
}

/// Generate `count` strings of `length` characters from `pattern` minus `exclude_chars`
pub fn generate_strings<S: UniformSource + ?Sized>(
    source: &mut S,
    length: usize,
    pattern: CharsetPattern,
    exclude_chars: &str,
    count: usize,
) -> GenResult<Vec<String>> {
    let domain = CharsetDomain::build(pattern, exclude_chars)?;
    log::debug!(
        "Generating {} strings of length {} from {} ({} chars)",
        count,
        length,
        pattern,
        domain.len()
    );
    Ok((0..count).map(|_| domain.draw_string(source, length)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RngSource;

    #[test]
    fn test_pattern_sizes() {
        assert_eq!(CharsetPattern::Alphanumeric.base_chars().len(), 62);
        assert_eq!(CharsetPattern::Alpha.base_chars().len(), 52);
        assert_eq!(CharsetPattern::Numeric.base_chars().len(), 10);
        assert_eq!(CharsetPattern::Hex.base_chars(), "0123456789abcdef");
        assert_eq!(CharsetPattern::Symbols.base_chars().len(), 32);
        assert_eq!(CharsetPattern::AlphanumericSymbols.base_chars().len(), 94);
    }

    #[test]
    fn test_punctuation_is_ascii_punctuation() {
        let expected: String = (0u8..128)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .collect();
        assert_eq!(PUNCTUATION, expected);
    }

    #[test]
    fn test_unknown_pattern_falls_back() {
        assert_eq!(CharsetPattern::from_name("klingon"), CharsetPattern::Alphanumeric);
        assert_eq!("hex".parse::<CharsetPattern>().unwrap(), CharsetPattern::Hex);
        for pattern in CharsetPattern::ALL {
            assert_eq!(CharsetPattern::from_name(pattern.name()), pattern);
        }
    }

    #[test]
    fn test_exclusion_is_case_sensitive() {
        let domain = CharsetDomain::build(CharsetPattern::Alpha, "aB").unwrap();
        assert_eq!(domain.len(), 50);
        assert!(!domain.contains('a'));
        assert!(domain.contains('A'));
        assert!(domain.contains('b'));
        assert!(!domain.contains('B'));
    }

    #[test]
    fn test_full_exclusion_is_empty_domain() {
        assert!(matches!(
            CharsetDomain::build(CharsetPattern::Numeric, "0123456789"),
            Err(GenError::EmptyDomain)
        ));
        let mut source = RngSource::seeded(1);
        assert!(matches!(
            generate_strings(&mut source, 5, CharsetPattern::Hex, "0123456789abcdefXYZ", 0),
            Err(GenError::EmptyDomain)
        ));
    }

    #[test]
    fn test_excluded_chars_never_generated() {
        let mut source = RngSource::seeded(31);
        let exclusions = ["", "aeiou", "0O1lI", "!@#$%^&*()", "abcdefABCDEF0123456789"];
        for pattern in CharsetPattern::ALL {
            for exclude in exclusions {
                match generate_strings(&mut source, 12, pattern, exclude, 20) {
                    Ok(strings) => {
                        let domain = CharsetDomain::build(pattern, exclude).unwrap();
                        for s in strings {
                            assert_eq!(s.chars().count(), 12);
                            assert!(s.chars().all(|c| !exclude.contains(c)));
                            assert!(s.chars().all(|c| domain.contains(c)));
                        }
                    }
                    Err(GenError::EmptyDomain) => {
                        assert!(pattern.base_chars().chars().all(|c| exclude.contains(c)));
                    }
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
        }
    }

    #[test]
    fn test_zero_length_strings() {
        let mut source = RngSource::seeded(1);
        let strings = generate_strings(&mut source, 0, CharsetPattern::Alpha, "", 3).unwrap();
        assert_eq!(strings, vec![String::new(); 3]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let domain = CharsetDomain::from_chars("abcabcx".chars());
        assert_eq!(domain.as_slice(), &['a', 'b', 'c', 'x']);
    }
}
