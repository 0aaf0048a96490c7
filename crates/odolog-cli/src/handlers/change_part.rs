use crate::types::OutputFormat;
use anyhow::Result;
use odolog_store::Store;

pub fn handle(
    store: &Store,
    name: &str,
    mileage: u64,
    notes: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut state = store.load()?;
    let changed = odolog_engine::change_part(&mut state, name, mileage, notes)?;
    store.save(&state)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changed)?),
        OutputFormat::Plain => {
            println!(
                "Recorded change of '{}' at {} km (was {} km); next due at {} km",
                changed.name, changed.new_mileage, changed.previous_mileage, changed.next_due
            );
        }
    }

    Ok(())
}
