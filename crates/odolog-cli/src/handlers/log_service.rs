use crate::types::OutputFormat;
use anyhow::Result;
use odolog_store::Store;

pub fn handle(
    store: &Store,
    description: &str,
    mileage: u64,
    cost: Option<f64>,
    details: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut state = store.load()?;
    let event = odolog_engine::log_service(&mut state, description, mileage, cost, details)?;
    store.save(&state)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&event)?),
        OutputFormat::Plain => {
            let cost_text = match event.cost {
                Some(cost) => format!(", cost {:.2}", cost),
                None => String::new(),
            };
            println!(
                "Logged '{}' at {} km{} ({})",
                event.description,
                event.mileage,
                cost_text,
                event.timestamp.format("%Y-%m-%d %H:%M UTC")
            );
        }
    }

    Ok(())
}
