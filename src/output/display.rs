//! Display functions for command results

use super::formatters::{create_progress_bar, format_mask, join_words};
use crate::commands::{FrequencyReport, SuggestResult};
use crate::solver::Suggestions;
use colored::Colorize;

/// Print the outcome of a suggestion run
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    if result.first_guess {
        println!(
            "No constraints yet, ranking all {} words",
            result.dictionary_size
        );
    } else {
        let constraints = &result.constraints;
        println!(
            "Known positions:   {}",
            format_mask(&constraints.mask).bright_green().bold()
        );
        println!(
            "Known letters:     {}",
            constraints.required.to_string().to_uppercase().bright_yellow()
        );
        println!(
            "Known non-letters: {}",
            constraints.forbidden.to_string().to_uppercase().bright_black()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    let ranking = &result.ranking;
    match &ranking.suggestions {
        Suggestions::Remaining(words) if words.is_empty() => {
            println!(
                "\n{}",
                "❌ No candidates remain! Check the constraints.".red().bold()
            );
        }
        Suggestions::Remaining(words) => {
            println!(
                "\nThese are all the remaining words ({}):",
                ranking.remaining.to_string().bright_cyan().bold()
            );
            for word in words {
                println!("  • {}", word.text().to_uppercase());
            }
        }
        Suggestions::Guesses(words) => {
            println!(
                "\nThere are {} remaining words",
                ranking.remaining.to_string().bright_cyan().bold()
            );
            let label = match result.strategy {
                "random" => "Some random next guesses:",
                _ => "Some good next guesses:",
            };
            println!(
                "{} {}",
                label,
                join_words(words).bright_white().bold()
            );
        }
    }
    println!();
}

/// Print letter counts as bars, most frequent first
pub fn print_frequency_report(report: &FrequencyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER FREQUENCIES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} letters across {} words\n",
        report.total_letters, report.dictionary_size
    );

    let max = report.letters.first().map_or(0, |&(_, count)| count) as f64;
    for &(letter, count) in &report.letters {
        let pct = if report.total_letters == 0 {
            0.0
        } else {
            count as f64 / report.total_letters as f64 * 100.0
        };
        println!(
            "   {}: {} {count:5} ({pct:4.1}%)",
            letter.to_ascii_uppercase().to_string().bright_yellow().bold(),
            create_progress_bar(count as f64, max, 40).green()
        );
    }
}
