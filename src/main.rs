use address_store::config::Command;
use address_store::utils::{
    logger,
    validation::{validate_non_empty_string, validate_one_of, validate_path},
};
use address_store::{
    Address, AddressRepository, AddressStore, CliConfig, InMemoryRepository, JsonFileRepository,
    TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = match &cli.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };
    let resolved = cli.resolve(file);

    logger::init_cli_logger(resolved.verbose);

    tracing::info!("Starting address-store CLI");
    if resolved.verbose {
        tracing::debug!(
            "Backend: {}, data path: {}",
            resolved.backend,
            resolved.data_path
        );
    }

    if let Err(e) = validate_one_of("backend", &resolved.backend, &["memory", "json"]) {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let result = match resolved.backend.as_str() {
        "memory" => {
            let store = AddressStore::new(InMemoryRepository::new());
            run_command(&store, cli.command).await
        }
        _ => {
            if let Err(e) = validate_path("data_path", &resolved.data_path) {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
            let store = AddressStore::new(JsonFileRepository::new(resolved.data_path));
            run_command(&store, cli.command).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_command<R: AddressRepository>(
    store: &AddressStore<R>,
    command: Command,
) -> address_store::Result<()> {
    match command {
        Command::Add {
            street,
            city,
            state,
            zip,
        } => {
            validate_non_empty_string("street", &street)?;
            validate_non_empty_string("city", &city)?;
            validate_non_empty_string("state", &state)?;
            validate_non_empty_string("zip", &zip)?;

            let saved = store.save(Address::new(&street, &city, &state, &zip)).await?;
            println!("✅ Saved address #{}", saved.id.unwrap_or_default());
        }
        Command::Get { id } => match store.find_by_id(id).await? {
            Some(address) => print_address(&address),
            None => println!("No address with id {}", id),
        },
        Command::List => {
            let all = store.find_all().await?;
            if all.is_empty() {
                println!("No addresses stored");
            }
            for address in &all {
                print_address(address);
            }
        }
        Command::Delete { id } => {
            store.delete_by_id(id).await?;
            println!("✅ Deleted address #{}", id);
        }
        Command::Count => {
            println!("{}", store.count().await?);
        }
        Command::Clear => {
            store.delete_all().await?;
            println!("✅ Cleared all addresses");
        }
    }
    Ok(())
}

fn print_address(address: &Address) {
    println!(
        "#{}: {}, {}, {} {}",
        address.id.unwrap_or_default(),
        address.street,
        address.city,
        address.state,
        address.zip
    );
}
