use hough_spiral_cleaner::batch::process_events;
use hough_spiral_cleaner::config::{self, OutputFormat};
use hough_spiral_cleaner::io::{load_events, write_json_file};
use hough_spiral_cleaner::{CleanerReport, HoughSpiralCleaner};
use serde::Serialize;
use std::env;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventOutcome {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<CleanerReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "spiral_clean".to_string());
    format!("Usage: {program} <config.json>")
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let cleaner = HoughSpiralCleaner::new(config.params.clone()).map_err(|e| e.to_string())?;
    let events = load_events(&config.input_path)?;
    let outcomes: Vec<EventOutcome> = process_events(&cleaner, &events)
        .into_iter()
        .enumerate()
        .map(|(index, res)| match res {
            Ok(report) => EventOutcome {
                index,
                report: Some(report),
                error: None,
            },
            Err(err) => EventOutcome {
                index,
                report: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    if config.output.format.includes_text() {
        print_text_summary(&outcomes, events.iter().map(|e| e.points.len()));
    }

    if config.output.format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &outcomes)?;
            println!("JSON report written to {}", path.display());
        } else {
            let json = serde_json::to_string_pretty(&outcomes)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if config.output.format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    Ok(())
}

fn print_text_summary(outcomes: &[EventOutcome], sizes: impl Iterator<Item = usize>) {
    println!("Cleaning summary ({} events)", outcomes.len());
    for (outcome, num_points) in outcomes.iter().zip(sizes) {
        match (&outcome.report, &outcome.error) {
            (Some(report), _) => {
                println!(
                    "  event {}: kept {}/{} points on {} line(s), angle_bin={} total_ms={:.3}",
                    outcome.index,
                    report.classification.num_assigned(),
                    num_points,
                    report.num_kept_lines(),
                    report.peak_search.angle_bin,
                    report.timings.total_ms
                );
                for (idx, summary) in report.line_summaries().iter().enumerate() {
                    println!(
                        "    line {}: radius={:.3} angle_deg={:.2} points={}{}",
                        idx,
                        summary.line.radius,
                        summary.line.angle.to_degrees(),
                        summary.num_points,
                        if summary.kept { "" } else { " (dropped)" }
                    );
                }
            }
            (None, Some(err)) => println!("  event {}: skipped ({err})", outcome.index),
            (None, None) => println!("  event {}: no result", outcome.index),
        }
    }
}
