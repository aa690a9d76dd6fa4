use serde_json::Value;

use crate::error::ShapeError;
use crate::normalize::Normalizer;

/// One record of the word list
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub word: Option<String>,
    pub meanings: Vec<Meaning>,
}

/// One sense of an entry
#[derive(Debug, Clone, Default)]
pub struct Meaning {
    pub def: Option<String>,
}

impl Meaning {
    fn from_value(key: &str, index: usize, value: &Value) -> Result<Self, ShapeError> {
        let Some(fields) = value.as_object() else {
            return Err(ShapeError(format!(
                "entry {key:?}: meaning {index} is {}, expected an object",
                describe(value)
            )));
        };

        let def = match truthy_field(fields, "def") {
            None => None,
            Some(Value::String(def)) => Some(def.clone()),
            Some(other) => {
                return Err(ShapeError(format!(
                    "entry {key:?}: meaning {index} def is {}, expected a string",
                    describe(other)
                )));
            }
        };

        Ok(Self { def })
    }

    /// Definition text, `None` when missing
    pub fn definition(&self) -> Option<&str> {
        self.def.as_deref().filter(|d| !d.is_empty())
    }
}

impl Entry {
    /// Build an entry from its JSON object.
    ///
    /// `meanings` is only inspected when `word` is present, and a non-string
    /// `word` is only rejected when some meaning would be printed with it.
    fn from_value(key: &str, value: &Value) -> Result<Self, ShapeError> {
        let Some(fields) = value.as_object() else {
            return Err(ShapeError(format!(
                "entry {key:?} is {}, expected an object",
                describe(value)
            )));
        };

        let (Some(word), Some(meanings)) =
            (truthy_field(fields, "word"), truthy_field(fields, "meanings"))
        else {
            return Ok(Self::default());
        };

        let Some(items) = meanings.as_array() else {
            return Err(ShapeError(format!(
                "entry {key:?}: meanings is {}, expected an array",
                describe(meanings)
            )));
        };

        let meanings = items
            .iter()
            .enumerate()
            .map(|(index, item)| Meaning::from_value(key, index, item))
            .collect::<Result<Vec<_>, _>>()?;

        let word = match word {
            Value::String(word) => Some(word.clone()),
            other if meanings.iter().any(|m| m.definition().is_some()) => {
                return Err(ShapeError(format!(
                    "entry {key:?}: word is {}, expected a string",
                    describe(other)
                )));
            }
            _ => None,
        };

        Ok(Self { word, meanings })
    }

    /// Headword, `None` when missing
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref().filter(|w| !w.is_empty())
    }

    pub fn meanings(&self) -> &[Meaning] {
        &self.meanings
    }

    /// Output lines for this entry, one per meaning with a definition
    pub fn definition_lines<N: Normalizer + ?Sized>(&self, normalizer: &N) -> Vec<String> {
        let Some(word) = self.word() else {
            return Vec::new();
        };

        self.meanings()
            .iter()
            .filter_map(Meaning::definition)
            .map(|def| normalizer.format_line(word, def))
            .collect()
    }
}

/// Parsed word list: entries in file order with their keys
#[derive(Debug, Clone, Default)]
pub struct Document {
    entries: Vec<(String, Entry)>,
}

impl Document {
    /// Check the shape of a parsed JSON value and convert it into typed entries
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let Some(map) = value.as_object() else {
            return Err(ShapeError(format!(
                "top-level value is {}, expected an object",
                describe(&value)
            )));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            entries.push((key.clone(), Entry::from_value(key, value)?));
        }

        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value)?)
    }

    /// `(key, entry)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Field value unless it is absent, null, false, zero, or an empty string, array or object
fn truthy_field<'a>(fields: &'a serde_json::Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| is_truthy(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::normalize::DefaultNormalizer;

    fn lines(value: Value) -> Vec<String> {
        let doc = Document::from_value(json!({ "1": value })).expect("valid document");
        doc.entries()
            .flat_map(|e| e.definition_lines(&DefaultNormalizer))
            .collect()
    }

    #[test]
    fn falsy_word_yields_no_lines() {
        for value in [
            json!({"meanings": [{"def": "x"}]}),
            json!({"word": null, "meanings": [{"def": "x"}]}),
            json!({"word": "", "meanings": [{"def": "x"}]}),
            json!({"word": false, "meanings": [{"def": "x"}]}),
            json!({"word": 0, "meanings": [{"def": "x"}]}),
        ] {
            assert!(lines(value.clone()).is_empty(), "{value}");
        }
    }

    #[test]
    fn meanings_are_not_inspected_without_a_word() {
        for value in [
            json!({"word": "", "meanings": [5]}),
            json!({"word": null, "meanings": "purrs"}),
            json!({"word": false, "meanings": [{"def": 7}]}),
        ] {
            assert!(lines(value.clone()).is_empty(), "{value}");
        }
    }

    #[test]
    fn falsy_meanings_yield_no_lines() {
        for value in [
            json!({"word": "cat"}),
            json!({"word": "cat", "meanings": null}),
            json!({"word": "cat", "meanings": []}),
            json!({"word": "cat", "meanings": {}}),
            json!({"word": "cat", "meanings": ""}),
            json!({"word": "cat", "meanings": 0}),
            json!({"word": "cat", "meanings": false}),
        ] {
            assert!(lines(value.clone()).is_empty(), "{value}");
        }
    }

    #[test]
    fn falsy_defs_are_skipped_but_siblings_kept() {
        let out = lines(json!({"word": "Run", "meanings": [
            {"def": "move fast"},
            {"def": ""},
            {"def": null},
            {"def": 0},
            {"def": false},
            {"def": []},
            {"def": {}},
            {"speech_part": "noun"},
            {"def": "an act of running"}
        ]}));
        assert_eq!(out, vec!["run|Move fast", "run|An act of running"]);
    }

    #[test]
    fn non_string_word_without_printable_defs_is_skipped() {
        assert!(lines(json!({"word": 5, "meanings": [{"def": ""}, {}]})).is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let out = lines(json!({"word": "ox", "wordset_id": "abc", "meanings": [{"def": "a bovine", "id": 3}]}));
        assert_eq!(out, vec!["ox|A bovine"]);
    }

    #[test]
    fn document_keeps_file_order() {
        let doc = Document::from_json(r#"{"z": {"word": "z"}, "a": {"word": "a"}, "m": {"word": "m"}}"#)
            .unwrap();
        assert_eq!(doc.iter().map(|(key, _)| key).collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn non_object_top_level_is_a_shape_error() {
        let err = Document::from_value(json!([1, 2])).unwrap_err();
        assert!(err.0.contains("an array"), "{err}");
    }

    #[test]
    fn non_object_entry_is_a_shape_error() {
        let err = Document::from_value(json!({"1": "cat"})).unwrap_err();
        assert!(err.0.contains("\"1\""), "{err}");
        assert!(err.0.contains("a string"), "{err}");
    }

    #[test]
    fn truthy_values_of_the_wrong_type_are_shape_errors() {
        for value in [
            json!({"1": {"word": 5, "meanings": [{"def": "five"}]}}),
            json!({"1": {"word": true, "meanings": [{"def": "yes"}]}}),
            json!({"1": {"word": "cat", "meanings": "purrs"}}),
            json!({"1": {"word": "cat", "meanings": {"def": "feline"}}}),
            json!({"1": {"word": "cat", "meanings": 3}}),
            json!({"1": {"word": "cat", "meanings": ["purrs"]}}),
            json!({"1": {"word": "cat", "meanings": [null]}}),
            json!({"1": {"word": "cat", "meanings": [{"def": 7}]}}),
            json!({"1": {"word": "cat", "meanings": [{"def": ["feline"]}]}}),
        ] {
            assert!(Document::from_value(value.clone()).is_err(), "{value}");
        }
    }
}
