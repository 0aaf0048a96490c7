use crate::types::OutputFormat;
use anyhow::Result;
use odolog_store::Store;

pub fn handle(store: &Store, mileage: u64, format: OutputFormat) -> Result<()> {
    let mut state = store.load()?;
    let update = odolog_engine::set_mileage(&mut state, mileage)?;
    store.save(&state)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&update)?),
        OutputFormat::Plain => {
            println!(
                "Odometer updated: {} -> {} km",
                update.previous, update.current
            );
        }
    }

    Ok(())
}
