// Tests for the public pipeline stages used directly
// WHY: Each stage is public so callers can inspect intermediate results

use gist::summarizer::{render_sentence, selector, FrequencyTable, Scorer, Segmenter};
use gist::{Lexicon, SelectionPolicy, Summarizer, SummarizerConfig, TokenKind, WordSet};

#[test]
fn test_abbreviation_scenario() {
    let lexicon = Lexicon::new(WordSet::new(), WordSet::from_words(["dr."]));
    let sentences = Segmenter::new(lexicon.abbreviations()).segment("Dr. Smith arrived. He left.");

    assert_eq!(sentences.len(), 2);
    assert_eq!(render_sentence(&sentences[0]), "Dr. smith arrived.");
    assert_eq!(render_sentence(&sentences[1]), "He left.");
}

#[test]
fn test_abbreviation_requires_list_entry() {
    let lexicon = Lexicon::new(WordSet::new(), WordSet::new());
    let sentences = Segmenter::new(lexicon.abbreviations()).segment("Dr. Smith arrived. He left.");
    assert_eq!(sentences.len(), 3);
}

#[test]
fn test_decimal_scenario() {
    let lexicon = Lexicon::new(WordSet::new(), WordSet::new());
    let sentences = Segmenter::new(lexicon.abbreviations()).segment("The price is 3.5 dollars. It rose.");

    assert_eq!(sentences.len(), 2);
    let decimal = &sentences[0].tokens[3];
    assert_eq!(decimal.kind, TokenKind::Protected);
    assert_eq!(decimal.text, "3.5");
    assert_eq!(render_sentence(&sentences[0]), "The price is 3.5 dollars.");
}

/// Counting and scoring classify the same tokens as content words
#[test]
fn test_classification_is_shared_between_passes() {
    let lexicon = Lexicon::english();
    let text = "Mr. Brown sold 4.5 tons of grain, rice and corn. Grain prices rose!";
    let sentences = Segmenter::new(lexicon.abbreviations()).segment(text);
    let table = FrequencyTable::build(&sentences, &lexicon);

    for token in sentences.iter().flat_map(|s| &s.tokens) {
        assert_eq!(
            lexicon.is_content_word(token),
            table.weight(&token.text).is_some() && token.kind == TokenKind::Word,
            "classification diverged for {token:?}"
        );
    }

    let scores = Scorer::new(&lexicon, &table).score_all(&sentences).unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(table.weight("grain"), Some(1.0));
}

#[test]
fn test_stage_composition_matches_summarizer() {
    let lexicon = Lexicon::english();
    let text = "Stars shine at night. Stars burn hydrogen. Clouds hide stars. It rained.";

    let sentences = Segmenter::new(lexicon.abbreviations()).segment(text);
    let table = FrequencyTable::build(&sentences, &lexicon);
    let scores = Scorer::new(&lexicon, &table).score_all(&sentences).unwrap();
    let selected = selector::select(&scores, SelectionPolicy::default());

    let summary = Summarizer::new(lexicon.clone(), SummarizerConfig::default())
        .unwrap()
        .summarize(text)
        .unwrap();
    assert_eq!(summary.indices(), selected);
    for sentence in &summary.sentences {
        assert_eq!(sentence.score, scores[sentence.index]);
    }
}

#[test]
fn test_custom_stop_words_change_scores() {
    let text = "Data drives decisions. Data data data everywhere. Decisions matter.";
    let plain = Summarizer::new(
        Lexicon::new(WordSet::new(), WordSet::new()),
        SummarizerConfig { selection: SelectionPolicy::Fixed(1) },
    )
    .unwrap();
    let no_data = Summarizer::new(
        Lexicon::new(WordSet::from_words(["data"]), WordSet::new()),
        SummarizerConfig { selection: SelectionPolicy::Fixed(1) },
    )
    .unwrap();

    assert_eq!(plain.summarize(text).unwrap().indices(), vec![1]);
    // Without "data" the first and last sentences tie; the earlier one wins
    assert_eq!(no_data.summarize(text).unwrap().indices(), vec![0]);
}

#[test]
fn test_summary_serializes_to_json() {
    let summary = Summarizer::with_default_lexicon()
        .unwrap()
        .summarize("Owls hunt at night. Owls sleep by day.")
        .unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["sentences_detected"], 2);
    assert_eq!(json["sentences"][0]["index"], 0);
    assert_eq!(json["sentences"][0]["text"], "Owls hunt at night.");
    assert!(json["sentences"][1]["score"].is_f64());
}
