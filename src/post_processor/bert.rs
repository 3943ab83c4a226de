//! BERT- and RoBERTa-style special-token insertion.

use super::{PostProcessedOutput, PostProcessor};
use serde::Deserialize;

/// A special token as configured: surface string plus vocabulary id. Only
/// the surface string matters here; the id rides along for the model.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialTokenConfig(pub String, pub u32);

#[derive(Debug, Clone, Deserialize)]
pub struct BertProcessingConfig {
    pub cls: SpecialTokenConfig,
    pub sep: SpecialTokenConfig,
}

/// Wraps sequences as `[CLS] A [SEP]` (+ `B [SEP]`), assigning segment type
/// ids 0 to the first sequence and 1 to the second.
#[derive(Debug, Clone)]
pub struct BertProcessing {
    cls: String,
    sep: String,
    double_sep: bool,
}

impl BertProcessing {
    pub fn new(config: BertProcessingConfig) -> Self {
        BertProcessing {
            cls: config.cls.0,
            sep: config.sep.0,
            double_sep: false,
        }
    }
}

/// RoBERTa variant: `<s> A </s>` with a doubled separator before the second
/// sequence.
#[derive(Debug, Clone)]
pub struct RobertaProcessing(BertProcessing);

impl RobertaProcessing {
    pub fn new(config: BertProcessingConfig) -> Self {
        RobertaProcessing(BertProcessing {
            cls: config.cls.0,
            sep: config.sep.0,
            double_sep: true,
        })
    }
}

impl PostProcessor for BertProcessing {
    fn post_process(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        add_special_tokens: bool,
    ) -> PostProcessedOutput {
        let mut out = Vec::with_capacity(tokens.len() + 4);
        if add_special_tokens {
            out.push(self.cls.clone());
        }
        out.extend(tokens);
        if add_special_tokens {
            out.push(self.sep.clone());
        }
        let mut token_type_ids = vec![0u32; out.len()];

        if let Some(pair) = tokens_pair {
            let before = out.len();
            if add_special_tokens && self.double_sep {
                out.push(self.sep.clone());
            }
            out.extend(pair.iter().cloned());
            if add_special_tokens {
                out.push(self.sep.clone());
            }
            token_type_ids.extend(std::iter::repeat(1).take(out.len() - before));
        }
        PostProcessedOutput {
            tokens: out,
            token_type_ids: Some(token_type_ids),
        }
    }
}

impl PostProcessor for RobertaProcessing {
    fn post_process(
        &self,
        tokens: Vec<String>,
        tokens_pair: Option<&[String]>,
        add_special_tokens: bool,
    ) -> PostProcessedOutput {
        self.0.post_process(tokens, tokens_pair, add_special_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn bert() -> BertProcessing {
        BertProcessing::new(BertProcessingConfig {
            cls: SpecialTokenConfig("[CLS]".into(), 101),
            sep: SpecialTokenConfig("[SEP]".into(), 102),
        })
    }

    fn roberta() -> RobertaProcessing {
        RobertaProcessing::new(BertProcessingConfig {
            cls: SpecialTokenConfig("<s>".into(), 0),
            sep: SpecialTokenConfig("</s>".into(), 2),
        })
    }

    #[test]
    fn wraps_a_single_sequence() {
        let output = bert().post_process(strings(&["a", "b"]), None, true);
        assert_eq!(output.tokens, strings(&["[CLS]", "a", "b", "[SEP]"]));
        assert_eq!(output.token_type_ids, Some(vec![0, 0, 0, 0]));
    }

    #[test]
    fn pair_sequence_gets_type_id_one() {
        let pair = strings(&["c"]);
        let output = bert().post_process(strings(&["a"]), Some(&pair), true);
        assert_eq!(
            output.tokens,
            strings(&["[CLS]", "a", "[SEP]", "c", "[SEP]"])
        );
        assert_eq!(output.token_type_ids, Some(vec![0, 0, 0, 1, 1]));
    }

    #[test]
    fn roberta_doubles_the_separator() {
        let pair = strings(&["c"]);
        let output = roberta().post_process(strings(&["a"]), Some(&pair), true);
        assert_eq!(
            output.tokens,
            strings(&["<s>", "a", "</s>", "</s>", "c", "</s>"])
        );
        assert_eq!(output.token_type_ids, Some(vec![0, 0, 0, 1, 1, 1]));
    }

    #[test]
    fn no_specials_leaves_tokens_bare() {
        let pair = strings(&["c"]);
        let output = bert().post_process(strings(&["a"]), Some(&pair), false);
        assert_eq!(output.tokens, strings(&["a", "c"]));
        assert_eq!(output.token_type_ids, Some(vec![0, 1]));
    }

    #[test]
    fn config_deserializes_token_id_pairs() {
        let config: BertProcessingConfig = serde_json::from_value(serde_json::json!({
            "cls": ["[CLS]", 101],
            "sep": ["[SEP]", 102],
        }))
        .unwrap();
        assert_eq!(config.cls.0, "[CLS]");
        assert_eq!(config.sep.1, 102);
    }
}
