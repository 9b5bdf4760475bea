//! Display functions for command results

use colored::Colorize;
use rustc_hash::FxHashSet;

use super::formatters::{format_line, render_board};
use crate::commands::PreviewResult;
use crate::core::PhraseEntry;

/// Print the computed layout for a phrase
pub fn print_preview_result(result: &PreviewResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BOARD PREVIEW:".bright_cyan().bold(),
        result.phrase.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nLine placement:");
    for (index, line) in result.lines.iter().enumerate() {
        let formatted = format_line(index, line);
        if line.start_column < 0 {
            // Wider than the board; flag it for the operator.
            println!("   {} {}", formatted.yellow(), "(overflows board)".red());
        } else {
            println!("   {formatted}");
        }
    }

    println!(
        "\n   {} tiles, {} distinct letters to guess",
        result.tile_count.to_string().bright_yellow(),
        result.target_count.to_string().bright_yellow()
    );

    println!("\n{}\n", render_board(&result.phrase, &FxHashSet::default()));
}

/// Print the phrase table as a numbered list
pub fn print_phrase_table(entries: &[PhraseEntry]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {:>3}  {:<40} {}",
        "#".bold(),
        "Sætning".bold(),
        "Kategori".bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (index, entry) in entries.iter().enumerate() {
        println!(
            " {:>3}  {:<40} {}",
            index + 1,
            entry.phrase,
            entry.category.bright_cyan()
        );
    }

    println!(
        "\n   {} {}\n",
        entries.len().to_string().bright_yellow(),
        if entries.len() == 1 { "row" } else { "rows" }
    );
}
