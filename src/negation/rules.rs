//! Negation signature table
//!
//! Hand-curated signatures for Japanese negation as analyzed by GiNZA. A
//! signature matches on the token's lemma and POS, optionally on the POS of
//! its head, and optionally requires the stop-word flag. Signatures are
//! mutually exclusive on (lemma, POS, head POS), so table order only affects
//! how early a scan stops.

use crate::types::{PosTag, Token};
use serde::Serialize;

/// One negation signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NegationRule {
    /// Accepted lemma spellings
    pub lemmas: &'static [&'static str],
    pub pos: PosTag,
    /// Required POS of the head token; `None` accepts any head
    pub head_pos: Option<PosTag>,
    pub requires_stopword: bool,
}

impl NegationRule {
    const fn stopword(lemmas: &'static [&'static str], pos: PosTag, head_pos: PosTag) -> Self {
        Self {
            lemmas,
            pos,
            head_pos: Some(head_pos),
            requires_stopword: true,
        }
    }

    /// Check `token` (with its resolved head) against this signature
    pub fn matches(&self, token: &Token, head: Option<&Token>) -> bool {
        if token.pos != self.pos || !self.lemmas.contains(&token.lemma.as_str()) {
            return false;
        }
        if self.requires_stopword && !token.is_stopword {
            return false;
        }
        match self.head_pos {
            Some(required) => head.is_some_and(|h| h.pos == required),
            None => true,
        }
    }
}

/// ない: negative auxiliary / negative adjective
pub const NAI: &[&str] = &["ない"];
/// ぬ: classical negative auxiliary (知らぬ)
pub const NU: &[&str] = &["ぬ"];
/// ず: negative auxiliary, continuative form (知らず)
pub const ZU: &[&str] = &["ず"];
/// 難い: "hard to ..." (信じ難い)
pub const GATAI: &[&str] = &["難い"];
/// なくなる: "no longer", both spellings
pub const NAKUNARU: &[&str] = &["なくなる", "無くなる"];

/// The built-in signature table
pub const NEGATION_RULES: &[NegationRule] = &[
    NegationRule::stopword(NAI, PosTag::Auxiliary, PosTag::Verb),
    NegationRule::stopword(NAI, PosTag::Auxiliary, PosTag::Noun),
    NegationRule::stopword(NAI, PosTag::Auxiliary, PosTag::Adverb),
    NegationRule::stopword(NAI, PosTag::Adjective, PosTag::Noun),
    NegationRule::stopword(NAI, PosTag::Adjective, PosTag::Verb),
    NegationRule::stopword(NAI, PosTag::Adjective, PosTag::Adjective),
    NegationRule::stopword(NAI, PosTag::Adjective, PosTag::Adverb),
    NegationRule::stopword(NU, PosTag::Auxiliary, PosTag::Verb),
    NegationRule::stopword(ZU, PosTag::Auxiliary, PosTag::Verb),
    NegationRule::stopword(ZU, PosTag::Auxiliary, PosTag::Adverb),
    NegationRule {
        lemmas: GATAI,
        pos: PosTag::Auxiliary,
        head_pos: Some(PosTag::Verb),
        requires_stopword: false,
    },
    NegationRule {
        lemmas: NAKUNARU,
        pos: PosTag::Verb,
        head_pos: None,
        requires_stopword: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DepRel;

    fn aux(lemma: &str, stop: bool) -> Token {
        Token::new(1, lemma, PosTag::Auxiliary, DepRel::Aux, 0).with_stopword(stop)
    }

    fn head(pos: PosTag) -> Token {
        Token::new(0, "h", pos, DepRel::Root, 0)
    }

    #[test]
    fn test_rule_requires_stopword() {
        let rule = NEGATION_RULES[0];
        let verb = head(PosTag::Verb);
        assert!(rule.matches(&aux("ない", true), Some(&verb)));
        assert!(!rule.matches(&aux("ない", false), Some(&verb)));
    }

    #[test]
    fn test_rule_checks_head_pos() {
        let rule = NEGATION_RULES[0];
        assert!(!rule.matches(&aux("ない", true), Some(&head(PosTag::Adjective))));
        assert!(!rule.matches(&aux("ない", true), None));
    }

    #[test]
    fn test_gatai_ignores_stopword() {
        let rule = NEGATION_RULES[10];
        assert!(rule.matches(&aux("難い", false), Some(&head(PosTag::Verb))));
    }

    #[test]
    fn test_nakunaru_any_head_either_spelling() {
        let rule = NEGATION_RULES[11];
        for lemma in ["なくなる", "無くなる"] {
            let token = Token::new(1, lemma, PosTag::Verb, DepRel::Root, 1);
            assert!(rule.matches(&token, Some(&token)));
            assert!(rule.matches(&token, None));
        }
    }

    #[test]
    fn test_rules_are_mutually_exclusive() {
        for (i, a) in NEGATION_RULES.iter().enumerate() {
            for b in &NEGATION_RULES[i + 1..] {
                let shared_lemma = a.lemmas.iter().any(|l| b.lemmas.contains(l));
                assert!(
                    !(shared_lemma && a.pos == b.pos && a.head_pos == b.head_pos),
                    "{:?} and {:?} overlap",
                    a,
                    b
                );
            }
        }
    }
}
