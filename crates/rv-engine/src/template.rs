//! Placeholder template expansion
//!
//! Templates mix literal text with single-letter placeholders:
//!
//! | Token | Expands to            |
//! |-------|-----------------------|
//! | `{d}` | digit                 |
//! | `{l}` | lowercase letter      |
//! | `{u}` | uppercase letter      |
//! | `{a}` | any letter            |
//! | `{x}` | lowercase hex digit   |
//! | `{s}` | ASCII punctuation     |
//! | `{w}` | letter or digit       |
//!
//! Any other brace content is literal. Token kinds are resolved one kind at a
//! time in table order; within a kind the first remaining occurrence is
//! replaced until none is left. Draw order under a seeded source depends on
//! this, so `"{l}{d}"` draws the digit first.

use serde::{Deserialize, Serialize};

use crate::charset::{CharsetDomain, DIGITS, HEX_DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};
use crate::source::UniformSource;

/// Placeholder kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Digit,
    Lower,
    Upper,
    Letter,
    Hex,
    Symbol,
    Word,
}

impl TokenKind {
    /// Substitution order
    pub const ORDER: [TokenKind; 7] = [
        Self::Digit,
        Self::Lower,
        Self::Upper,
        Self::Letter,
        Self::Hex,
        Self::Symbol,
        Self::Word,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::Digit => "{d}",
            Self::Lower => "{l}",
            Self::Upper => "{u}",
            Self::Letter => "{a}",
            Self::Hex => "{x}",
            Self::Symbol => "{s}",
            Self::Word => "{w}",
        }
    }

    pub fn domain(&self) -> CharsetDomain {
        let chars = match self {
            Self::Digit => DIGITS.to_string(),
            Self::Lower => LOWERCASE.to_string(),
            Self::Upper => UPPERCASE.to_string(),
            Self::Letter => [LOWERCASE, UPPERCASE].concat(),
            Self::Hex => HEX_DIGITS.to_string(),
            Self::Symbol => PUNCTUATION.to_string(),
            Self::Word => [LOWERCASE, UPPERCASE, DIGITS].concat(),
        };
        CharsetDomain::from_chars(chars.chars())
    }
}

/// Compiled expander holding one domain per token kind
#[derive(Debug, Clone)]
pub struct TemplateExpander {
    domains: Vec<(TokenKind, CharsetDomain)>,
}

impl Default for TemplateExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateExpander {
    pub fn new() -> Self {
        Self {
            domains: TokenKind::ORDER.iter().map(|k| (*k, k.domain())).collect(),
        }
    }

    /// Expand every placeholder in `template` once
    pub fn expand<S: UniformSource + ?Sized>(&self, source: &mut S, template: &str) -> String {
        let mut result = template.to_string();
        for (kind, domain) in &self.domains {
            let token = kind.token();
            while let Some(pos) = result.find(token) {
                let mut buf = [0u8; 4];
                let replacement = domain.draw(source).encode_utf8(&mut buf);
                result.replace_range(pos..pos + token.len(), replacement);
            }
        }
        result
    }
}

/// `count` independent expansions of `template`
pub fn expand_template<S: UniformSource + ?Sized>(
    source: &mut S,
    template: &str,
    count: usize,
) -> Vec<String> {
    let expander = TemplateExpander::new();
    log::debug!(
        "Expanding template '{}' x{} ({} placeholders)",
        template,
        count,
        template_tokens(template).iter().map(|(_, n)| n).sum::<usize>()
    );
    (0..count).map(|_| expander.expand(source, template)).collect()
}

/// Placeholder count per kind in the unexpanded template
pub fn template_tokens(template: &str) -> Vec<(TokenKind, usize)> {
    TokenKind::ORDER
        .iter()
        .map(|k| (*k, template.matches(k.token()).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}
