use crate::types::OutputFormat;
use anyhow::Result;
use odolog_store::Store;

pub fn handle(
    store: &Store,
    name: &str,
    interval: u64,
    last_change: u64,
    notes: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut state = store.load()?;
    let added = odolog_engine::add_part(&mut state, name, interval, last_change, notes)?;
    store.save(&state)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&added)?),
        OutputFormat::Plain => {
            println!(
                "Tracking '{}': every {} km, last change at {} km, next due at {} km",
                added.name, added.interval, added.last_change_mileage, added.next_due
            );
        }
    }

    Ok(())
}
