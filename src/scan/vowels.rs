use serde::{Deserialize, Serialize};
use tracing::error;

/// Longest run of consecutive vowels found in one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelRun {
    pub word: String,
    pub sequence: String,
    pub length: usize,
}

impl VowelRun {
    pub fn scan(word: &str) -> Self {
        let mut best = "";
        let mut best_len = 0;
        let mut run_start: Option<usize> = None;
        let mut run_len = 0;

        for (index, ch) in word.char_indices() {
            if is_vowel(ch) {
                run_start.get_or_insert(index);
                run_len += 1;
            } else if let Some(start) = run_start.take() {
                if run_len > best_len {
                    best = &word[start..index];
                    best_len = run_len;
                }
                run_len = 0;
            }
        }

        if let Some(start) = run_start {
            if run_len > best_len {
                best = &word[start..];
                best_len = run_len;
            }
        }

        Self {
            word: word.to_string(),
            sequence: best.to_string(),
            length: best_len,
        }
    }
}

pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// One descriptor per word, in input order.
pub fn longest_vowel_runs<S: AsRef<str>>(words: &[S]) -> Vec<VowelRun> {
    words
        .iter()
        .map(|word| VowelRun::scan(word.as_ref()))
        .collect()
}

/// Renders the runs as a JSON array. An absent word list reads as empty.
pub fn vowel_runs_json<S: AsRef<str>>(words: Option<&[S]>) -> String {
    let runs = longest_vowel_runs(words.unwrap_or_default());
    serde_json::to_string(&runs).unwrap_or_else(|err| {
        error!(error = %err, "vowel runs could not be serialized");
        "[]".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_of_vowels() {
        let run = VowelRun::scan("aeiou");
        assert_eq!(run.sequence, "aeiou");
        assert_eq!(run.length, 5);
    }

    #[test]
    fn word_without_vowels() {
        let run = VowelRun::scan("xyz");
        assert_eq!(run.sequence, "");
        assert_eq!(run.length, 0);
    }

    #[test]
    fn case_is_ignored_and_preserved() {
        let run = VowelRun::scan("AEibo");
        assert_eq!(run.sequence, "AEi");
        assert_eq!(run.length, 3);
    }

    #[test]
    fn first_of_equal_runs_wins() {
        let run = VowelRun::scan("baexoi");
        assert_eq!(run.sequence, "ae");
        assert_eq!(run.length, 2);
    }

    #[test]
    fn longer_later_run_replaces_earlier() {
        let run = VowelRun::scan("tab queue");
        assert_eq!(run.sequence, "ueue");
        assert_eq!(run.length, 4);
    }

    #[test]
    fn run_ending_the_word_is_considered() {
        let run = VowelRun::scan("strategia");
        assert_eq!(run.sequence, "ia");
        assert_eq!(run.length, 2);
    }

    #[test]
    fn non_ascii_letters_break_runs() {
        let run = VowelRun::scan("aéio");
        assert_eq!(run.sequence, "io");
        assert_eq!(run.length, 2);
    }

    #[test]
    fn missing_and_empty_lists_match() {
        assert_eq!(vowel_runs_json::<&str>(None), "[]");
        assert_eq!(vowel_runs_json::<&str>(Some(&[])), "[]");
    }

    #[test]
    fn json_keeps_input_order() {
        let words = ["sky", "beautiful"];
        assert_eq!(
            vowel_runs_json(Some(&words[..])),
            r#"[{"word":"sky","sequence":"","length":0},{"word":"beautiful","sequence":"eau","length":3}]"#
        );
    }
}
