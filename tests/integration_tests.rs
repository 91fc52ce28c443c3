//! Integration tests for rapid_depwalk

use rapid_depwalk::*;

/// この薬を飲んでも肌が荒れない。毎晩使います。
///
/// Token layout as produced by ja_ginza_electra with split mode C.
const SAMPLE_JSON: &str = r#"{
    "tokens": [
        {"i": 0,  "text": "この", "pos": "DET",   "dep": "det",   "head": 1, "sentence_idx": 0},
        {"i": 1,  "text": "薬",   "pos": "NOUN",  "dep": "obj",   "head": 3, "sentence_idx": 0},
        {"i": 2,  "text": "を",   "pos": "ADP",   "dep": "case",  "head": 1, "sentence_idx": 0, "is_stop": true},
        {"i": 3,  "text": "飲ん", "lemma": "飲む", "pos": "VERB", "dep": "advcl", "head": 8, "sentence_idx": 0},
        {"i": 4,  "text": "で",   "pos": "SCONJ", "dep": "mark",  "head": 3, "sentence_idx": 0, "is_stop": true},
        {"i": 5,  "text": "も",   "pos": "ADP",   "dep": "case",  "head": 3, "sentence_idx": 0, "is_stop": true},
        {"i": 6,  "text": "肌",   "pos": "NOUN",  "dep": "nsubj", "head": 8, "sentence_idx": 0},
        {"i": 7,  "text": "が",   "pos": "ADP",   "dep": "case",  "head": 6, "sentence_idx": 0, "is_stop": true},
        {"i": 8,  "text": "荒れ", "lemma": "荒れる", "pos": "VERB", "dep": "ROOT", "head": 8, "sentence_idx": 0},
        {"i": 9,  "text": "ない", "pos": "AUX",   "dep": "aux",   "head": 8, "sentence_idx": 0, "is_stop": true},
        {"i": 10, "text": "。",   "pos": "PUNCT", "dep": "punct", "head": 8, "sentence_idx": 0},
        {"i": 11, "text": "毎晩", "pos": "NOUN",  "dep": "obl",   "head": 12, "sentence_idx": 1},
        {"i": 12, "text": "使い", "lemma": "使う", "pos": "VERB", "dep": "ROOT", "head": 12, "sentence_idx": 1},
        {"i": 13, "text": "ます", "pos": "AUX",   "dep": "aux",   "head": 12, "sentence_idx": 1, "is_stop": true},
        {"i": 14, "text": "。",   "pos": "PUNCT", "dep": "punct", "head": 12, "sentence_idx": 1}
    ],
    "noun_chunks": [
        {"start_token": 0, "end_token": 2, "root": 1},
        {"start_token": 6, "end_token": 7, "root": 6},
        {"start_token": 11, "end_token": 12, "root": 11}
    ],
    "bunsetu": [
        {"start_token": 0, "end_token": 1},
        {"start_token": 1, "end_token": 3},
        {"start_token": 3, "end_token": 6},
        {"start_token": 6, "end_token": 8},
        {"start_token": 8, "end_token": 11},
        {"start_token": 11, "end_token": 12},
        {"start_token": 12, "end_token": 15}
    ]
}"#;

fn sample_doc() -> Document {
    document_from_json(SAMPLE_JSON).unwrap().0
}

fn indices(tokens: &[&Token]) -> Vec<usize> {
    tokens.iter().map(|t| t.index).collect()
}

#[test]
fn test_sample_loads() {
    let doc = sample_doc();
    assert_eq!(doc.len(), 15);
    assert_eq!(doc.sentences().len(), 2);
    assert!(doc.validate_roots().is_ok());
    assert_eq!(doc.noun_chunks().len(), 3);
    assert_eq!(doc.bunsetu().len(), 7);
}

#[test]
fn test_selectors() {
    let doc = sample_doc();

    let nouns = select_tokens(&doc, Some(&[PosTag::Noun]));
    assert_eq!(indices(&nouns), vec![1, 6, 11]);

    let all = select_tokens(&doc, None);
    assert_eq!(all.len(), doc.len());

    let meaningful = select_meaningful(&doc);
    assert_eq!(indices(&meaningful), vec![1, 3, 6, 8, 11, 12]);

    let verbs = select::select_group(&doc, PosGroup::Verbs);
    assert_eq!(indices(&verbs), vec![3, 8, 12]);
}

#[test]
fn test_root_relations_per_sentence() {
    let doc = sample_doc();
    let roots = select_relation_group(&doc, DepGroup::Root);
    let pairs: Vec<(usize, usize)> = roots.iter().map(|(d, h)| (d.index, h.index)).collect();
    assert_eq!(pairs, vec![(8, 8), (12, 12)]);

    let case_marks = select_relations(&doc, Some(&[DepRel::Case]));
    assert_eq!(case_marks.len(), 3);
    assert!(case_marks.iter().all(|(d, _)| d.pos == PosTag::Adposition));
}

#[test]
fn test_ancestor_walks() {
    let doc = sample_doc();
    let walker = AncestorWalker::new();
    let token = |i: usize| doc.token(i).unwrap();

    assert_eq!(indices(&walker.ancestors(&doc, token(0))), vec![1, 3, 8]);
    assert_eq!(indices(&walker.ancestors(&doc, token(7))), vec![6, 8]);
    assert_eq!(indices(&walker.ancestors(&doc, token(8))), vec![8]);
    assert_eq!(indices(&walker.ancestors(&doc, token(13))), vec![12]);

    let short = AncestorWalker::with_max_depth(1);
    assert_eq!(indices(&short.ancestors(&doc, token(0))), vec![1]);

    let full = AncestorWalker::full_ancestors(&doc, token(2)).unwrap();
    assert_eq!(indices(&full), vec![1, 3, 8]);
}

#[test]
fn test_noun_chunk_chains() {
    let doc = sample_doc();
    let chains = AncestorWalker::new().noun_chunk_chains(&doc);
    let summary: Vec<(usize, Vec<usize>)> = chains
        .iter()
        .map(|c| (c.root.index, walk::chain_indices(&c.ancestors)))
        .collect();
    assert_eq!(
        summary,
        vec![(1, vec![3, 8]), (6, vec![8]), (11, vec![12])]
    );
}

#[test]
fn test_negation() {
    let doc = sample_doc();
    assert!(is_negative(&doc));
    let hit = NegationDetector::new().first_match(&doc).unwrap();
    assert_eq!(hit.token, 9);

    // Second sentence alone carries no negation
    let positive = r#"{"tokens": [
        {"i": 0, "text": "毎晩", "pos": "NOUN", "dep": "obl", "head": 1},
        {"i": 1, "text": "使い", "lemma": "使う", "pos": "VERB", "dep": "ROOT", "head": 1},
        {"i": 2, "text": "ます", "pos": "AUX", "dep": "aux", "head": 1, "is_stop": true}
    ]}"#;
    let (doc, _) = document_from_json(positive).unwrap();
    assert!(!is_negative(&doc));
}

#[test]
fn test_bunsetu_attachments() {
    let doc = sample_doc();
    let pairs: Vec<(usize, usize)> = bunsetu_attachments(&doc)
        .iter()
        .map(|a| (a.dependent.index, a.chunk.start_token))
        .collect();
    assert_eq!(pairs, vec![(0, 1), (1, 3), (3, 8), (6, 8), (11, 12)]);
}

#[test]
fn test_labels() {
    assert_eq!(pos_label("NOUN").unwrap(), "名詞");
    assert_eq!(pos_label("PRON").unwrap(), "代名詞");
    assert_eq!(pos_label("PROPN").unwrap(), "固有名詞");
    assert_eq!(dep_label("ROOT").unwrap(), "文の根");
    assert!(matches!(
        pos_label("NOUNS"),
        Err(DepWalkError::UnknownCategory { .. })
    ));
    assert!(dep_label("nsubj:pass").is_err());
}

#[test]
fn test_export() {
    let doc = sample_doc();
    let rows = token_rows(&doc);
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[8].lemma, "荒れる");
    assert_eq!(rows[8].left_dependents, vec![3, 6]);
    assert_eq!(rows[8].right_dependents, vec![9, 10]);
    assert_eq!(rows[0].head_surface, "薬");

    let freq = pos_frequencies(&doc);
    let nouns = freq.iter().find(|c| c.category == PosTag::Noun).unwrap();
    assert_eq!(nouns.count, 3);

    let hist = pos_transitions(&doc);
    assert_eq!(hist.total(), doc.len());
    assert_eq!(hist.get("助動詞", "動詞"), 2);
}

#[test]
fn test_full_report() {
    let (doc, config) = document_from_json(SAMPLE_JSON).unwrap();
    let report = analyze(&doc, &config).unwrap();
    assert_eq!(report.token_count, 15);
    assert_eq!(report.sentence_count, 2);
    assert!(report.is_negative);
    assert_eq!(report.roots.len(), 2);
    assert_eq!(report.attachments.len(), 5);
    assert_eq!(report.noun_chunk_chains.len(), 3);

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["negation"]["token"], 9);
}

#[test]
fn test_batch_from_jsonl() {
    let line = SAMPLE_JSON.replace('\n', " ");
    let input = format!("{}\n{}\n", line, line);
    let docs = documents_from_jsonl(&input).unwrap();
    let docs: Vec<Document> = docs.into_iter().map(|(d, _)| d).collect();
    let reports = analyze_batch(&docs, &AnalysisConfig::default()).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0], reports[1]);
}

/// Provider that replays one fixed document
struct FixedProvider {
    rules: Vec<EntityRule>,
}

impl AnnotationProvider for FixedProvider {
    fn parse(&self, _text: &str, _split_mode: SplitMode) -> Result<Document> {
        let doc = sample_doc();
        let entities = self
            .rules
            .iter()
            .filter_map(|r| match &r.pattern {
                EntityPattern::Phrase(p) => doc
                    .tokens()
                    .iter()
                    .find(|t| &t.text == p)
                    .map(|t| NamedEntity::new(t.index, t.index + 1, r.label.clone())),
                EntityPattern::Tokens(_) => None,
            })
            .collect();
        doc.with_entities(entities)
    }

    fn add_entity_rules(&mut self, rules: &[EntityRule]) -> Result<()> {
        self.rules.extend_from_slice(rules);
        Ok(())
    }
}

#[test]
fn test_provider_with_entity_rules() {
    let mut provider = FixedProvider { rules: Vec::new() };
    provider
        .add_entity_rules(&[EntityRule::phrase("Body", "肌")])
        .unwrap();
    let doc = annotate(&provider, "この薬を飲んでも肌が荒れない。", &AnalysisConfig::default())
        .unwrap();
    assert_eq!(doc.entities().len(), 1);

    let chains = AncestorWalker::new().entity_chains(&doc);
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].root.index, 6);
    assert_eq!(walk::chain_indices(&chains[0].ancestors), vec![8]);
}

#[test]
fn test_malformed_input_is_rejected() {
    let bad_head = r#"{"tokens": [
        {"i": 0, "text": "a", "pos": "NOUN", "dep": "root", "head": 0},
        {"i": 1, "text": "b", "pos": "NOUN", "dep": "nmod", "head": 7}
    ]}"#;
    assert!(matches!(
        document_from_json(bad_head),
        Err(DepWalkError::MalformedTree { .. })
    ));

    let bad_dep = r#"{"tokens": [{"i": 0, "text": "a", "pos": "NOUN", "dep": "nsubj:pass", "head": 0}]}"#;
    assert!(matches!(
        document_from_json(bad_dep),
        Err(DepWalkError::UnknownCategory { .. })
    ));
}

#[test]
fn test_empty_input_never_fails() {
    let doc = Document::default();
    assert!(select_tokens(&doc, None).is_empty());
    assert!(select_meaningful(&doc).is_empty());
    assert!(select_relations(&doc, None).is_empty());
    assert!(!is_negative(&doc));
    assert!(bunsetu_attachments(&doc).is_empty());
    let report = analyze(&doc, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.token_count, 0);
}
