//! Category display tables
//!
//! Fixed mappings from part-of-speech codes and dependency relation codes to
//! the Japanese display names used in reports and charts. Both tables are
//! total over their enums; a raw code outside the enum is an
//! [`UnknownCategory`](crate::errors::DepWalkError::UnknownCategory) error and
//! is never replaced by a default.

use crate::errors::Result;
use crate::types::{DepRel, PosTag};

/// A closed tag set with a display name for every member
pub trait CategoryLabel: Copy + Eq + Ord + std::hash::Hash + 'static {
    /// Every member, in table order
    fn all() -> &'static [Self];

    /// Parse a raw model code
    fn from_code(code: &str) -> Result<Self>;

    /// The raw model code
    fn code(self) -> &'static str;

    /// The display name
    fn label(self) -> &'static str;
}

impl CategoryLabel for PosTag {
    fn all() -> &'static [Self] {
        &PosTag::ALL
    }

    fn from_code(code: &str) -> Result<Self> {
        PosTag::from_code(code)
    }

    fn code(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        match self {
            PosTag::Adjective => "形容詞",
            PosTag::Adposition => "接置詞",
            PosTag::Adverb => "副詞",
            PosTag::Auxiliary => "助動詞",
            PosTag::CoordinatingConjunction => "接続詞",
            PosTag::Conjunction => "接続詞",
            PosTag::Determiner => "限定詞",
            PosTag::Interjection => "感嘆符",
            PosTag::Noun => "名詞",
            PosTag::Numeral => "数詞",
            PosTag::Particle => "助詞",
            PosTag::Pronoun => "代名詞",
            PosTag::ProperNoun => "固有名詞",
            PosTag::Punctuation => "句読点",
            PosTag::SubordinatingConjunction => "従属接続詞",
            PosTag::Symbol => "記号",
            PosTag::Verb => "動詞",
            PosTag::Other => "その他",
            PosTag::Space => "空白",
        }
    }
}

impl CategoryLabel for DepRel {
    fn all() -> &'static [Self] {
        &DepRel::ALL
    }

    fn from_code(code: &str) -> Result<Self> {
        DepRel::from_code(code)
    }

    fn code(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        match self {
            DepRel::Acl => "名詞節修飾語",
            DepRel::Advcl => "副詞節修飾語",
            DepRel::Advmod => "副詞修飾語",
            DepRel::Amod => "形容詞修飾語",
            DepRel::Appos => "同格",
            DepRel::Aux => "助動詞",
            DepRel::Case => "格表現",
            DepRel::Cc => "等位接続詞",
            DepRel::Ccomp => "補文",
            DepRel::Clf => "類別詞",
            DepRel::Compound => "複合名詞",
            DepRel::Conj => "結合詞",
            DepRel::Cop => "連結詞",
            DepRel::Csubj => "主部",
            DepRel::Dep => "不明な依存関係",
            DepRel::Det => "限定詞",
            DepRel::Discourse => "談話要素",
            DepRel::Dislocated => "転置",
            DepRel::Dobj => "直接目的語",
            DepRel::Expl => "虚辞",
            DepRel::Fixed => "固定複数単語表現",
            DepRel::Flat => "同格複数単語表現",
            DepRel::Foreign => "外国語の複合語",
            DepRel::Goeswith => "一単語分割表現",
            DepRel::Iobj => "間接目的語",
            DepRel::List => "リスト表現",
            DepRel::Mark => "接続詞",
            DepRel::Mwe => "機能表現の複合語",
            DepRel::Name => "固有名詞の複合語",
            DepRel::Neg => "否定語",
            DepRel::Nmod => "名詞修飾語",
            DepRel::Nsubj => "主語名詞",
            DepRel::Nsubjpass => "受身主語名詞",
            DepRel::Nummod => "数詞修飾語",
            DepRel::Obj => "目的語",
            DepRel::Obl => "斜格名詞",
            DepRel::Orphan => "独立関係",
            DepRel::Parataxis => "並列",
            DepRel::Punct => "句読点",
            DepRel::Reparandum => "単語として認識されない単語表現",
            DepRel::Root => "文の根",
            DepRel::Vocative => "発声関係",
            DepRel::Xcomp => "補体",
        }
    }
}

/// Look up the display name of a raw code
pub fn lookup_label<T: CategoryLabel>(code: &str) -> Result<&'static str> {
    T::from_code(code).map(T::label)
}

/// The full `(member, display name)` table, in enumeration order
pub fn label_table<T: CategoryLabel>() -> Vec<(T, &'static str)> {
    T::all().iter().map(|&c| (c, c.label())).collect()
}

/// Display name for a raw part-of-speech code (`NOUN` → `名詞`)
pub fn pos_label(code: &str) -> Result<&'static str> {
    lookup_label::<PosTag>(code)
}

/// Display name for a raw dependency label (`nsubj` → `主語名詞`)
pub fn dep_label(code: &str) -> Result<&'static str> {
    lookup_label::<DepRel>(code)
}

/// The whole part-of-speech table
pub fn pos_label_table() -> Vec<(PosTag, &'static str)> {
    label_table::<PosTag>()
}

/// The whole dependency relation table
pub fn dep_label_table() -> Vec<(DepRel, &'static str)> {
    label_table::<DepRel>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DepWalkError;

    #[test]
    fn test_pos_label_lookup() {
        assert_eq!(pos_label("NOUN").unwrap(), "名詞");
        assert_eq!(pos_label("verb").unwrap(), "動詞");
        assert_eq!(pos_label("PRON").unwrap(), "代名詞");
        assert_eq!(pos_label("PROPN").unwrap(), "固有名詞");
    }

    #[test]
    fn test_dep_label_lookup() {
        assert_eq!(dep_label("ROOT").unwrap(), "文の根");
        assert_eq!(dep_label("nsubj").unwrap(), "主語名詞");
        assert_eq!(dep_label("obl").unwrap(), "斜格名詞");
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        assert!(matches!(
            pos_label("NOPE"),
            Err(DepWalkError::UnknownCategory { .. })
        ));
        assert!(matches!(
            dep_label(""),
            Err(DepWalkError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_tables_are_total() {
        let pos = pos_label_table();
        assert_eq!(pos.len(), PosTag::ALL.len());
        assert!(pos.iter().all(|(_, name)| !name.is_empty()));

        let dep = dep_label_table();
        assert_eq!(dep.len(), DepRel::ALL.len());
        assert!(dep.iter().all(|(_, name)| !name.is_empty()));
        assert_eq!(dep[0], (DepRel::Acl, "名詞節修飾語"));
    }

    #[test]
    fn test_lookup_is_stable() {
        for (tag, name) in pos_label_table() {
            assert_eq!(pos_label(tag.as_str()).unwrap(), name);
            assert_eq!(pos_label(tag.as_str()).unwrap(), name);
        }
    }
}
