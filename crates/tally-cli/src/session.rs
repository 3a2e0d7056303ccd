//! Interactive formula-row session
//!
//! Plays the part of the reference surface: line commands stand in for the
//! selection widget, the per-row Calculate button, and the Add Field
//! button. The session owns the widget's job of handing the controller the
//! complete post-change tag list.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tally::prelude::*;

pub fn run(catalog: Option<&Path>) -> Result<()> {
    let options = match catalog {
        Some(path) => load_catalog(path)?,
        None => Vec::new(),
    };
    if options.is_empty() {
        tracing::warn!("no suggestion catalog loaded; free-text tags only");
    }

    let controller = InputController::new();
    let mut store = RowStore::new();

    println!("tally - type `help` for commands, `quit` to exit");
    render(&store);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match dispatch(line.trim(), &controller, &mut store, &options) {
            Ok(Outcome::Continue) => render(&store),
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Quit) => break,
            Err(err) => println!("error: {}", err),
        }
    }

    Ok(())
}

enum Outcome {
    Continue,
    Silent,
    Quit,
}

fn dispatch(
    line: &str,
    controller: &InputController,
    store: &mut RowStore,
    options: &[SuggestionOption],
) -> Result<Outcome> {
    let mut parts = line.splitn(3, ' ');
    let command = parts.next().unwrap_or("");

    match command {
        "" => Ok(Outcome::Silent),

        "help" => {
            print_help();
            Ok(Outcome::Silent)
        }
        "quit" | "exit" => Ok(Outcome::Quit),

        "list" => {
            if options.is_empty() {
                println!("(no suggestions)");
            }
            for option in options {
                println!(
                    "  {} [{}] -> {}",
                    option.label,
                    option.item.category,
                    option.item.value.literal()
                );
            }
            Ok(Outcome::Silent)
        }

        "add" => {
            controller.add_row(store);
            Ok(Outcome::Continue)
        }

        "type" => {
            let row = parse_row(parts.next())?;
            let text = parts.next().unwrap_or("");
            controller.input_changed(store, row, text)?;
            Ok(Outcome::Continue)
        }

        "enter" | "tab" | "back" => {
            let row = parse_row(parts.next())?;
            let key = match command {
                "enter" => Key::Enter,
                "tab" => Key::Tab,
                _ => Key::Backspace,
            };
            controller.key_pressed(store, row, key)?;
            Ok(Outcome::Continue)
        }

        "pick" => {
            let row = parse_row(parts.next())?;
            let label = parts.next().context("usage: pick <row> <label>")?;
            let option = options
                .iter()
                .find(|o| o.label == label)
                .with_context(|| format!("no suggestion labeled '{}'", label))?;

            // The widget contract: hand over the full post-change list
            let mut tags = row_tags(store, row)?;
            tags.push(Tag::from(option.clone()));
            controller.selection_changed(store, row, tags)?;
            Ok(Outcome::Continue)
        }

        "drop" => {
            let row = parse_row(parts.next())?;
            let index: usize = parts
                .next()
                .context("usage: drop <row> <tag-index>")?
                .parse()
                .context("tag index must be a number")?;

            let mut tags = row_tags(store, row)?;
            if index >= tags.len() {
                anyhow::bail!("row {} has {} tags", row, tags.len());
            }
            tags.remove(index);
            controller.selection_changed(store, row, tags)?;
            Ok(Outcome::Continue)
        }

        "calc" => {
            let row = parse_row(parts.next())?;
            controller.calculate(store, row)?;
            Ok(Outcome::Continue)
        }

        other => anyhow::bail!("unknown command '{}'; try `help`", other),
    }
}

fn parse_row(part: Option<&str>) -> Result<usize> {
    part.context("missing row index")?
        .parse()
        .context("row index must be a number")
}

fn row_tags(store: &RowStore, row: usize) -> Result<Vec<Tag>> {
    Ok(store
        .row(row)
        .with_context(|| format!("no row {}", row))?
        .tags()
        .to_vec())
}

fn load_catalog(path: &Path) -> Result<Vec<SuggestionOption>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read suggestion catalog {}", path.display()))?;
    let items: Vec<SuggestionItem> =
        serde_json::from_str(&data).context("suggestion catalog is not a JSON array of items")?;
    tracing::debug!("loaded {} suggestions from {}", items.len(), path.display());
    Ok(SuggestionOption::from_items(items))
}

fn render(store: &RowStore) {
    for (index, row) in store.rows().iter().enumerate() {
        let tags = row
            .tags()
            .iter()
            .map(|t| format!("[{}]", t.label()))
            .collect::<Vec<_>>()
            .join(" ");
        let result = match row.evaluation() {
            Some(value) => value.to_string(),
            None => "-".into(),
        };
        println!(
            "  row {}: {} | input: \"{}\" | result: {}",
            index,
            tags,
            row.input_text(),
            result
        );
    }
}

fn print_help() {
    println!("  type <row> <text>   set the row's input text");
    println!("  enter <row>         commit input text as a tag");
    println!("  back <row>          erase the last input character");
    println!("  tab <row>           (suppressed, does nothing)");
    println!("  pick <row> <label>  append a suggestion tag");
    println!("  drop <row> <index>  remove a committed tag");
    println!("  calc <row>          evaluate the row's tags");
    println!("  add                 append a new row");
    println!("  list                show the suggestion catalog");
    println!("  quit                exit");
}
