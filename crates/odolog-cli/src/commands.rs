use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use odolog_store::{Store, resolve_db_path};

pub fn run(cli: Cli) -> Result<()> {
    let db_path = resolve_db_path(cli.db.as_deref());
    let store = Store::open(db_path);

    let Some(command) = cli.command else {
        show_guidance(&store);
        return Ok(());
    };

    match command {
        Commands::SetMileage { mileage } => {
            handlers::set_mileage::handle(&store, mileage, cli.format)
        }

        Commands::AddPart {
            name,
            interval,
            last_change,
            notes,
        } => handlers::add_part::handle(&store, &name, interval, last_change, notes, cli.format),

        Commands::ChangePart {
            name,
            mileage,
            notes,
        } => handlers::change_part::handle(&store, &name, mileage, notes, cli.format),

        Commands::Due { at } => handlers::due::handle(&store, at, cli.format),

        Commands::LogService {
            description,
            mileage,
            cost,
            details,
        } => handlers::log_service::handle(&store, &description, mileage, cost, details, cli.format),

        Commands::History => handlers::history::handle(&store, cli.format),
    }
}

fn show_guidance(store: &Store) {
    println!("odolog - vehicle maintenance tracker\n");

    if store.path().exists() {
        println!("Data file: {}\n", store.path().display());
        println!("Common commands:");
        println!("  odolog due                        show parts by urgency");
        println!("  odolog history                    show logged services");
        println!("  odolog set-mileage <km>           update the odometer");
    } else {
        println!("Get started:");
        println!("  odolog set-mileage <km>");
        println!("  odolog add-part <name> <interval> <last-change>\n");
        println!("Then check what needs attention:");
        println!("  odolog due");
    }

    println!("\nRun 'odolog --help' for the full command list.");
}
