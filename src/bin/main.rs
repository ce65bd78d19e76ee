use crossterm::style::Stylize;
use izon_core::TranslationEngine;
use std::io::{stdin, stdout, Write};
use std::path::Path;

const DICTIONARY_PATH: &str = "data/en_to_ijaw.json";

fn main() {
    let dict_path = Path::new(DICTIONARY_PATH);
    let engine = if dict_path.exists() {
        match TranslationEngine::from_dictionary_file(dict_path) {
            Ok(engine) => engine,
            Err(e) => {
                // A present-but-broken dictionary is a configuration
                // error; refusing to start beats silently dropping it.
                eprintln!("[ERROR] Could not load '{}': {}", DICTIONARY_PATH, e);
                std::process::exit(1);
            }
        }
    } else {
        eprintln!(
            "[WARN] No dictionary at '{}', starting with role tables only.",
            DICTIONARY_PATH
        );
        TranslationEngine::new()
    };

    println!("{}", "English -> Ijaw (Izon) Translator".bold());
    println!("---------------------------------------------------------------");
    println!("Type an English sentence to translate it.");
    println!("':add english = ijaw' adds a phrase, ':stats' shows the lexicon,");
    println!("'exit' saves the dictionary and quits.\n");

    loop {
        print!("{} ", "EN>".green().bold());
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            ":stats" => {
                let stats = engine.stats();
                println!(
                    "pronouns: {}, verbs: {}, nouns: {}, adjectives: {}, phrases: {}",
                    stats.pronouns, stats.verbs, stats.nouns, stats.adjectives, stats.phrase_entries
                );
            }
            s if s.starts_with(":add ") => match s[5..].split_once('=') {
                Some((english, ijaw)) if !english.trim().is_empty() && !ijaw.trim().is_empty() => {
                    engine.add_phrase(english.trim(), ijaw.trim());
                    println!("Added: '{}' -> '{}'", english.trim(), ijaw.trim());
                }
                _ => println!("Usage: :add english phrase = ijaw phrase"),
            },
            sentence => {
                println!("{} {}", "IJ>".cyan().bold(), engine.translate(sentence).cyan());
            }
        }
    }

    println!("\nSaving dictionary...");
    if let Err(e) = engine.save_dictionary(Path::new(DICTIONARY_PATH)) {
        eprintln!("[ERROR] Could not save dictionary: {}", e);
    } else {
        println!("Dictionary saved to '{}'", DICTIONARY_PATH);
    }
}
