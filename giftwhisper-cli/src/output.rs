/// Output formatting: terminal table and JSON.
use giftwhisper_core::{Pairing, Strategy};
use serde::Serialize;

#[derive(Serialize)]
struct JsonPairing {
    gifter: String,
    receiver: String,
}

#[derive(Serialize)]
struct JsonOutput {
    pairings: Vec<JsonPairing>,
    participants: usize,
    strategy: &'static str,
}

pub fn strategy_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Chained => "chained",
        Strategy::Uniform => "uniform",
    }
}

/// Print the draw as a formatted terminal table.
pub fn print_table(pairings: &[Pairing], names: &[String]) {
    // Find the widest gifter name for padding
    let gifter_width = pairings
        .iter()
        .map(|&(g, _)| names[g as usize].len())
        .max()
        .unwrap_or(6)
        .max(6); // at least "Gifter"

    // Header
    println!("{:<gifter_width$} | Receiver", "Gifter");
    println!("{}-|---------", "-".repeat(gifter_width));

    // Rows
    for &(gifter, receiver) in pairings {
        println!(
            "{:<gifter_width$} | {}",
            names[gifter as usize], names[receiver as usize],
        );
    }

    println!("\n{} participants paired", pairings.len());
}

/// Print the draw as JSON.
pub fn print_json(pairings: &[Pairing], names: &[String], strategy: Strategy) {
    let output = JsonOutput {
        pairings: pairings
            .iter()
            .map(|&(g, r)| JsonPairing {
                gifter: names[g as usize].clone(),
                receiver: names[r as usize].clone(),
            })
            .collect(),
        participants: names.len(),
        strategy: strategy_label(strategy),
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
