//! End-to-end pipeline runs over realistic configurations.

use serde_json::json;
use tokpipe::Pipeline;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn bert_style_pipeline_end_to_end() {
    let pipeline = Pipeline::from_value(&json!({
        "normalizer": {"type": "BertNormalizer"},
        "pre_tokenizer": {"type": "BertPreTokenizer"},
        "post_processor": {
            "type": "TemplateProcessing",
            "single": [
                {"SpecialToken": {"id": "[CLS]", "type_id": 0}},
                {"Sequence": {"id": "A", "type_id": 0}},
                {"SpecialToken": {"id": "[SEP]", "type_id": 0}},
            ],
            "pair": [],
        },
        "decoder": {"type": "WordPiece", "prefix": "##", "cleanup": true},
    }))
    .unwrap();

    assert_eq!(pipeline.normalize("Héllo, World!"), "hello, world!");

    let pieces = pipeline.pre_tokenize("Héllo, World!");
    assert_eq!(pieces, strings(&["hello", ",", "world", "!"]));

    let processed = pipeline.post_process(pieces, None, true);
    assert_eq!(
        processed.tokens,
        strings(&["[CLS]", "hello", ",", "world", "!", "[SEP]"])
    );
    assert_eq!(processed.token_type_ids, Some(vec![0; 6]));

    let decoded = pipeline.decode(processed.tokens);
    insta::assert_snapshot!(decoded, @"[CLS] hello, world! [SEP]");
}

#[test]
fn byte_level_pipeline_round_trips() {
    let pipeline = Pipeline::from_value(&json!({
        "pre_tokenizer": {"type": "ByteLevel", "add_prefix_space": true},
        "decoder": {"type": "ByteLevel"},
    }))
    .unwrap();

    let text = "Hello wörld — 日本語!";
    let pieces = pipeline.pre_tokenize(text);
    // Every piece is in the printable stand-in alphabet, never raw bytes.
    assert!(pieces.iter().all(|piece| !piece.contains(' ')));

    let decoded = pipeline.decode(pieces);
    assert_eq!(decoded, format!(" {text}"));
}

#[test]
fn metaspace_pipeline_round_trips() {
    let pipeline = Pipeline::from_value(&json!({
        "normalizer": {"type": "Strip"},
        "pre_tokenizer": {
            "type": "Metaspace",
            "replacement": "▁",
            "add_prefix_space": true,
        },
        "decoder": {
            "type": "Metaspace",
            "replacement": "▁",
            "add_prefix_space": true,
        },
    }))
    .unwrap();

    let pieces = pipeline.pre_tokenize("  hello brave new world ");
    assert_eq!(pieces, strings(&["▁hello▁brave▁new▁world"]));
    assert_eq!(pipeline.decode(pieces), "hello brave new world");
}

#[test]
fn ctc_pipeline_decodes_frame_output() {
    let pipeline = Pipeline::from_value(&json!({
        "decoder": {
            "type": "CTC",
            "pad_token": "<pad>",
            "word_delimiter_token": "|",
            "cleanup": true,
        },
    }))
    .unwrap();

    let frames = strings(&[
        "<pad>", "h", "e", "e", "l", "l", "<pad>", "l", "o", "|", "w", "o", "r", "l", "d",
    ]);
    insta::assert_snapshot!(pipeline.decode(frames), @"hello world");
}

#[test]
fn byte_fallback_recovers_multibyte_characters() {
    let pipeline = Pipeline::from_value(&json!({
        "decoder": {
            "type": "Sequence",
            "decoders": [
                {"type": "ByteFallback"},
                {"type": "Fuse"},
                {"type": "Replace", "pattern": {"String": "▁"}, "content": " "},
            ],
        },
    }))
    .unwrap();

    let tokens = strings(&["▁caf", "<0xC3>", "<0xA9>", "▁au", "▁lait"]);
    assert_eq!(pipeline.decode(tokens), " café au lait");
}
