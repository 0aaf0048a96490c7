use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use odolog_engine::DueReport;
use odolog_store::Store;
use owo_colors::OwoColorize;

pub fn handle(store: &Store, at: Option<u64>, format: OutputFormat) -> Result<()> {
    let state = store.load()?;
    let report = odolog_engine::due_report(&state, at)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &DueReport) {
    if report.parts.is_empty() {
        println!("No parts tracked yet. Add one with 'odolog add-part'.");
        return;
    }

    let color = std::io::stdout().is_terminal();

    println!("Odometer: {} km", report.current_mileage);
    println!("{}", "-".repeat(72));

    for entry in &report.parts {
        let status = if entry.due {
            if color {
                "DUE NOW".red().bold().to_string()
            } else {
                "DUE NOW".to_string()
            }
        } else if color {
            "ok".green().to_string()
        } else {
            "ok".to_string()
        };

        print!(
            "  {}: last change {} km | every {} km | next due {} km | remaining {} km | {}",
            entry.name,
            entry.last_change_mileage,
            entry.interval,
            entry.next_due,
            entry.remaining,
            status
        );
        match &entry.notes {
            Some(notes) => println!(" | {}", notes),
            None => println!(),
        }
    }
}
