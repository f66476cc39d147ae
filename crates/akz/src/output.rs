//! Terminal output formatting for `akz`.

use akz_lexicon::LexiconEntry;
use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

/// Renders entries as a three-column table (headword, class, glosses).
pub fn result_table(entries: &[LexiconEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Headword", "Class", "Definition"]);

    for entry in entries {
        let class = entry
            .senses
            .iter()
            .find_map(|s| s.class_label())
            .unwrap_or("");
        let audio = if entry.has_audio() { " \u{1f50a}" } else { "" };

        table.add_row(vec![
            Cell::new(format!("{}{audio}", entry.headword)),
            Cell::new(class),
            Cell::new(entry.joined_glosses()),
        ]);
    }

    table
}

/// Prints one full entry: senses, principal parts, derivation, notes,
/// examples, and related terms.
pub fn print_entry(entry: &LexiconEntry, related: &[&LexiconEntry]) {
    println!("{}", entry.headword);

    for (i, sense) in entry.senses.iter().enumerate() {
        match sense.class_label() {
            Some(class) => println!("  {}. {} [{}]", i + 1, sense.gloss, class),
            None => println!("  {}. {}", i + 1, sense.gloss),
        }
    }

    if let Some(derivation) = entry.derivation_text() {
        println!("  derivation: {derivation}");
    }
    if let Some(notes) = entry.notes_text() {
        println!("  notes: {notes}");
    }

    let parts = entry.labeled_principal_parts();
    if !parts.is_empty() {
        println!("  principal parts:");
        for (form, label) in parts {
            println!("    {form}  {label}");
        }
    }

    if !entry.example_sentences.is_empty() {
        println!("  examples:");
        for example in &entry.example_sentences {
            let source = example.source_text.as_deref().unwrap_or("-");
            let translation = example.translation.as_deref().unwrap_or("-");
            println!("    {source}  ({translation})");
        }
    }

    if !related.is_empty() {
        let names: Vec<&str> = related.iter().map(|e| e.headword.as_str()).collect();
        println!("  related: {}", names.join(", "));
    }

    if !entry.audio_refs.is_empty() {
        println!("  audio: {}", entry.audio_refs.join(", "));
    }

    println!();
}
