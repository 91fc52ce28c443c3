//! Token selection by part of speech

use crate::document::Document;
use crate::select::groups::{PosGroup, MEANINGFUL};
use crate::types::{PosTag, Token};

/// Flatten all sentences in document order, keeping tokens whose POS is in
/// `tags`. `None` keeps every token.
pub fn select_tokens<'a>(doc: &'a Document, tags: Option<&[PosTag]>) -> Vec<&'a Token> {
    doc.iter_sentences()
        .flatten()
        .filter(|t| tags.map_or(true, |set| set.contains(&t.pos)))
        .collect()
}

/// Complement of [`select_tokens`]: tokens whose POS is not in `tags`
pub fn select_tokens_excluding<'a>(doc: &'a Document, tags: &[PosTag]) -> Vec<&'a Token> {
    doc.iter_sentences()
        .flatten()
        .filter(|t| !tags.contains(&t.pos))
        .collect()
}

/// Tokens of a named group (nouns, verbs, ...)
pub fn select_group(doc: &Document, group: PosGroup) -> Vec<&Token> {
    select_tokens(doc, Some(group.tags()))
}

/// Content words whose head is not nominal.
///
/// A token is dropped when its head is a noun, proper noun or pronoun. The
/// root is its own head, so a nominal root is dropped as well.
pub fn select_meaningful(doc: &Document) -> Vec<&Token> {
    select_tokens(doc, Some(MEANINGFUL))
        .into_iter()
        .filter(|t| doc.head_of(t).map_or(true, |head| !head.pos.is_nominal()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tests::build;
    use crate::select::groups::NOUNS;
    use crate::types::DepRel;

    /// 美しい 肌 を 手 に 入れる 。 / 毎晩 使う 。
    fn doc() -> Document {
        build(&[
            &[
                ("美しい", PosTag::Adjective, DepRel::Acl, 1),
                ("肌", PosTag::Noun, DepRel::Obj, 5),
                ("を", PosTag::Adposition, DepRel::Case, 1),
                ("手", PosTag::Noun, DepRel::Obl, 5),
                ("に", PosTag::Adposition, DepRel::Case, 3),
                ("入れる", PosTag::Verb, DepRel::Root, 5),
                ("。", PosTag::Punctuation, DepRel::Punct, 5),
            ],
            &[
                ("毎晩", PosTag::Adverb, DepRel::Advmod, 1),
                ("使う", PosTag::Verb, DepRel::Root, 1),
                ("。", PosTag::Punctuation, DepRel::Punct, 1),
            ],
        ])
    }

    fn texts(tokens: &[&Token]) -> Vec<String> {
        tokens.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_select_all_tokens() {
        let doc = doc();
        let all = select_tokens(&doc, None);
        assert_eq!(all.len(), 10);
        assert!(all.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn test_select_nouns() {
        let doc = doc();
        assert_eq!(texts(&select_tokens(&doc, Some(NOUNS))), vec!["肌", "手"]);
        assert_eq!(texts(&select_group(&doc, PosGroup::Nouns)), vec!["肌", "手"]);
    }

    #[test]
    fn test_select_groups() {
        let doc = doc();
        assert_eq!(texts(&select_group(&doc, PosGroup::Verbs)), vec!["入れる", "使う"]);
        assert_eq!(texts(&select_group(&doc, PosGroup::Particles)), vec!["を", "に"]);
        assert_eq!(texts(&select_group(&doc, PosGroup::Adverbs)), vec!["毎晩"]);
        assert!(select_group(&doc, PosGroup::Numerals).is_empty());
    }

    #[test]
    fn test_excluding_is_complement() {
        let doc = doc();
        let kept = select_tokens(&doc, Some(NOUNS));
        let rest = select_tokens_excluding(&doc, NOUNS);
        assert_eq!(kept.len() + rest.len(), doc.len());
        assert!(kept.iter().all(|k| !rest.iter().any(|r| r.index == k.index)));
    }

    #[test]
    fn test_meaningful_drops_tokens_headed_by_nouns() {
        let doc = doc();
        // 美しい modifies 肌 (a noun) and is dropped; 肌 and 手 attach to a verb
        assert_eq!(
            texts(&select_meaningful(&doc)),
            vec!["肌", "手", "入れる", "毎晩", "使う"]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert!(select_tokens(&doc, None).is_empty());
        assert!(select_tokens_excluding(&doc, NOUNS).is_empty());
        assert!(select_meaningful(&doc).is_empty());
    }

    #[test]
    fn test_selection_is_idempotent() {
        let doc = doc();
        let first = texts(&select_group(&doc, PosGroup::Nouns));
        let second = texts(&select_group(&doc, PosGroup::Nouns));
        assert_eq!(first, second);
    }
}
