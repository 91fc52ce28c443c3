//! Named category groups
//!
//! Each group is a fixed tag set; there is no logic here beyond the sets.

use crate::types::{DepRel, PosTag};
use serde::{Deserialize, Serialize};

/// Nouns, proper nouns and pronouns
pub const NOUNS: &[PosTag] = &[PosTag::Noun, PosTag::ProperNoun, PosTag::Pronoun];
pub const VERBS: &[PosTag] = &[PosTag::Verb];
pub const ADJECTIVES: &[PosTag] = &[PosTag::Adjective];
pub const ADVERBS: &[PosTag] = &[PosTag::Adverb];
pub const NUMERALS: &[PosTag] = &[PosTag::Numeral];
pub const AUXILIARY_VERBS: &[PosTag] = &[PosTag::Auxiliary];
pub const CONJUNCTIONS: &[PosTag] = &[
    PosTag::Conjunction,
    PosTag::CoordinatingConjunction,
    PosTag::SubordinatingConjunction,
];
/// Case, binding and sentence-final particles
pub const PARTICLES: &[PosTag] = &[PosTag::Adposition, PosTag::Particle];

/// Content words considered by [`crate::select::select_meaningful`]
pub const MEANINGFUL: &[PosTag] = &[
    PosTag::Noun,
    PosTag::ProperNoun,
    PosTag::Verb,
    PosTag::Adjective,
    PosTag::Adverb,
];

pub const ROOT_RELATIONS: &[DepRel] = &[DepRel::Root];
/// Elements attached to a predicate
pub const PREDICATE_MODIFIERS: &[DepRel] = &[
    DepRel::Nsubj,
    DepRel::Nsubjpass,
    DepRel::Dobj,
    DepRel::Iobj,
    DepRel::Nmod,
    DepRel::Csubj,
    DepRel::Ccomp,
    DepRel::Advcl,
    DepRel::Advmod,
    DepRel::Neg,
];
/// Modifiers of a noun
pub const NOUN_MODIFIERS: &[DepRel] = &[
    DepRel::Nummod,
    DepRel::Appos,
    DepRel::Acl,
    DepRel::Amod,
    DepRel::Det,
];
pub const COMPOUNDING: &[DepRel] = &[DepRel::Compound, DepRel::Name, DepRel::Mwe, DepRel::Foreign];
pub const COORDINATION: &[DepRel] = &[DepRel::Conj, DepRel::Cc];
/// Function-word attachments
pub const OTHER_RELATIONS: &[DepRel] = &[
    DepRel::Aux,
    DepRel::Cop,
    DepRel::Mark,
    DepRel::Case,
    DepRel::Punct,
];

/// Named part-of-speech groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosGroup {
    Nouns,
    Verbs,
    Adjectives,
    Adverbs,
    Numerals,
    AuxiliaryVerbs,
    Conjunctions,
    Particles,
}

impl PosGroup {
    pub const ALL: [PosGroup; 8] = [
        PosGroup::Nouns,
        PosGroup::Verbs,
        PosGroup::Adjectives,
        PosGroup::Adverbs,
        PosGroup::Numerals,
        PosGroup::AuxiliaryVerbs,
        PosGroup::Conjunctions,
        PosGroup::Particles,
    ];

    /// The tag set behind this group
    pub fn tags(&self) -> &'static [PosTag] {
        match self {
            PosGroup::Nouns => NOUNS,
            PosGroup::Verbs => VERBS,
            PosGroup::Adjectives => ADJECTIVES,
            PosGroup::Adverbs => ADVERBS,
            PosGroup::Numerals => NUMERALS,
            PosGroup::AuxiliaryVerbs => AUXILIARY_VERBS,
            PosGroup::Conjunctions => CONJUNCTIONS,
            PosGroup::Particles => PARTICLES,
        }
    }
}

/// Named dependency relation groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepGroup {
    Root,
    PredicateModifiers,
    NounModifiers,
    Compounding,
    Coordination,
    Other,
}

impl DepGroup {
    pub const ALL: [DepGroup; 6] = [
        DepGroup::Root,
        DepGroup::PredicateModifiers,
        DepGroup::NounModifiers,
        DepGroup::Compounding,
        DepGroup::Coordination,
        DepGroup::Other,
    ];

    /// The relation set behind this group
    pub fn relations(&self) -> &'static [DepRel] {
        match self {
            DepGroup::Root => ROOT_RELATIONS,
            DepGroup::PredicateModifiers => PREDICATE_MODIFIERS,
            DepGroup::NounModifiers => NOUN_MODIFIERS,
            DepGroup::Compounding => COMPOUNDING,
            DepGroup::Coordination => COORDINATION,
            DepGroup::Other => OTHER_RELATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_groups_are_disjoint() {
        let mut seen = Vec::new();
        for group in PosGroup::ALL {
            for tag in group.tags() {
                assert!(!seen.contains(tag), "{:?} appears in two groups", tag);
                seen.push(*tag);
            }
        }
    }

    #[test]
    fn test_dep_groups_are_disjoint() {
        let mut seen = Vec::new();
        for group in DepGroup::ALL {
            for rel in group.relations() {
                assert!(!seen.contains(rel), "{:?} appears in two groups", rel);
                seen.push(*rel);
            }
        }
    }

    #[test]
    fn test_group_serde_names() {
        assert_eq!(
            serde_json::to_string(&PosGroup::AuxiliaryVerbs).unwrap(),
            r#""auxiliary_verbs""#
        );
        assert_eq!(
            serde_json::to_string(&DepGroup::PredicateModifiers).unwrap(),
            r#""predicate_modifiers""#
        );
    }
}
