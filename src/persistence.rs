// File: src/persistence.rs
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;
use tempfile::NamedTempFile;

/// Loads the phrase dictionary: a flat JSON object of English phrase →
/// Ijaw string. Keys are normalized to lower-cased, trimmed form.
/// A missing or malformed file surfaces as an error for the caller to
/// treat as fatal at start-up.
pub fn load_phrase_dictionary(path: &Path) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
    Ok(raw
        .into_iter()
        .map(|(english, ijaw)| (english.trim().to_lowercase(), ijaw))
        .collect())
}

/// Writes the phrase dictionary atomically: serialize into a temp file in
/// the target directory, then persist over the destination.
pub fn save_phrase_dictionary(phrases: &HashMap<String, String>, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    serde_json::to_writer_pretty(writer, phrases)
        .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_dictionary_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en_to_ijaw.json");

        let mut phrases = HashMap::new();
        phrases.insert("hello".to_string(), "sanma".to_string());
        phrases.insert("thank you".to_string(), "migwo".to_string());

        save_phrase_dictionary(&phrases, &path).unwrap();
        let loaded = load_phrase_dictionary(&path).unwrap();
        assert_eq!(loaded, phrases);
    }

    #[test]
    fn load_normalizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        fs::write(&path, r#"{" Good Morning ": "dọ́ọ̀"}"#).unwrap();

        let loaded = load_phrase_dictionary(&path).unwrap();
        assert_eq!(loaded.get("good morning").map(String::as_str), Some("dọ́ọ̀"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(load_phrase_dictionary(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_phrase_dictionary(Path::new("no/such/dictionary.json")).is_err());
    }
}
