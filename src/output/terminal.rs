// Colored terminal output for keyword lists, term checks, and link
// suggestions.
//
// This module owns all terminal-specific formatting: colors, tables,
// the 4-decimal weight rendering. The main.rs command arms delegate here.

use colored::Colorize;

use crate::pipeline::keywords::{DocumentKeywords, TermCheck};
use crate::pipeline::similarity::SimilarityMatrix;

use super::truncate_chars;

/// Display a ranked keyword list for one document as a weight bar chart.
pub fn display_keywords(keywords: &DocumentKeywords) {
    println!(
        "\n{}",
        format!("=== Keywords for {} ===", truncate_chars(&keywords.label, 60)).bold()
    );
    println!();

    let bar_width: usize = 20;

    for (i, score) in keywords.scores.iter().enumerate() {
        // Weights are L2-normalized, so they already live in [0, 1].
        let filled = (score.weight * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if score.weight >= 0.5 {
            bar.bright_green()
        } else if score.weight >= 0.25 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<24} {} {:.4}",
            i + 1,
            score.term.bold(),
            colored_bar,
            score.weight
        );
    }
}

/// Display presence/absence verdicts for caller-supplied candidate terms.
pub fn display_term_checks(checks: &[TermCheck]) {
    if checks.is_empty() {
        return;
    }

    println!("\n{}", "=== Candidate Keywords ===".bold());
    println!();

    for check in checks {
        match check.weight {
            Some(weight) => println!(
                "  {} '{}' is present with a weight of {:.4}",
                "+".green().bold(),
                check.term,
                weight
            ),
            None => println!(
                "  {} '{}' is {} present in the vocabulary",
                "-".yellow(),
                check.term,
                "NOT".yellow()
            ),
        }
    }
}

/// Display the pairwise similarity matrix with a numbered label legend.
///
/// The diagonal is self-similarity and carries no information, so it
/// renders as a dash.
pub fn display_similarity_matrix(labels: &[&str], matrix: &SimilarityMatrix) {
    println!("\n{}", "=== Page Similarity ===".bold());
    println!();

    for (i, label) in labels.iter().enumerate() {
        println!("  [{}] {}", i + 1, truncate_chars(label, 70).dimmed());
    }
    println!();

    // Column header
    print!("       ");
    for j in 0..matrix.len() {
        print!("  [{:>2}]  ", j + 1);
    }
    println!();

    for i in 0..matrix.len() {
        print!("  [{:>2}] ", i + 1);
        for j in 0..matrix.len() {
            if i == j {
                print!("{}", "     -  ".dimmed());
            } else {
                print!(" {:.4} ", matrix.get(i, j));
            }
        }
        println!();
    }
}

/// Display link suggestions for every page.
pub fn display_link_suggestions(labels: &[&str], suggestions: &[Vec<usize>], threshold: f64) {
    println!(
        "\n{}",
        format!("=== Suggested Internal Links (similarity > {threshold}) ===").bold()
    );
    println!();

    for (i, related) in suggestions.iter().enumerate() {
        println!("  {}", truncate_chars(labels[i], 70).bold());
        if related.is_empty() {
            println!("      {}", "(no related pages)".dimmed());
        } else {
            for &j in related {
                println!("      -> {}", truncate_chars(labels[j], 66));
            }
        }
    }
}
