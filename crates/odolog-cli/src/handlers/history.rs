use crate::types::OutputFormat;
use anyhow::Result;
use odolog_store::Store;
use odolog_types::ServiceEvent;

pub fn handle(store: &Store, format: OutputFormat) -> Result<()> {
    let state = store.load()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&state.service_log)?)
        }
        OutputFormat::Plain => print_log(&state.service_log),
    }

    Ok(())
}

fn print_log(log: &[ServiceEvent]) {
    if log.is_empty() {
        println!("No service records yet. Log one with 'odolog log-service'.");
        return;
    }

    println!("Service history:");
    println!("{}", "-".repeat(72));

    for event in log {
        let cost_text = match event.cost {
            Some(cost) => format!("{:.2}", cost),
            None => "-".to_string(),
        };
        print!(
            "  {} | {} km | {} | cost {}",
            event.timestamp.format("%Y-%m-%d %H:%M UTC"),
            event.mileage,
            event.description,
            cost_text
        );
        match &event.details {
            Some(details) => println!(" | {}", details),
            None => println!(),
        }
    }
}
