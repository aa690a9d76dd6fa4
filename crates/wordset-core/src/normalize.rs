/// Case rules applied to extracted words and definitions
pub trait Normalizer {
    /// Headwords are stored fully lower-cased
    fn lower_word(&self, word: &str) -> String {
        word.to_lowercase()
    }

    /// Upper-case only the first character, the rest is kept as-is
    fn capitalize(&self, text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => {
                let mut out: String = first.to_uppercase().collect();
                out.push_str(chars.as_str());
                out
            }
            None => String::new(),
        }
    }

    /// One `word|Definition` line, without the trailing newline
    fn format_line(&self, word: &str, definition: &str) -> String {
        format!("{}|{}", self.lower_word(word), self.capitalize(definition))
    }
}

pub struct DefaultNormalizer;
impl Normalizer for DefaultNormalizer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_touches_first_char_only() {
        let n = DefaultNormalizer;
        assert_eq!(n.capitalize("a small domesticated feline"), "A small domesticated feline");
        assert_eq!(n.capitalize("already Upper"), "Already Upper");
        assert_eq!(n.capitalize("mIxEd cAsE"), "MIxEd cAsE");
        assert_eq!(n.capitalize("(archaic) a cat"), "(archaic) a cat");
        assert_eq!(n.capitalize(""), "");
    }

    #[test]
    fn capitalize_handles_multibyte_first_char() {
        let n = DefaultNormalizer;
        assert_eq!(n.capitalize("éclair pastry"), "Éclair pastry");
        // ß has no single-char uppercase form
        assert_eq!(n.capitalize("ßx"), "SSx");
    }

    #[test]
    fn lower_word_is_full_lowercase() {
        let n = DefaultNormalizer;
        assert_eq!(n.lower_word("CaT"), "cat");
        assert_eq!(n.lower_word("New York"), "new york");
    }

    #[test]
    fn format_line_joins_with_pipe() {
        assert_eq!(DefaultNormalizer.format_line("Dog", "a canine"), "dog|A canine");
    }
}
