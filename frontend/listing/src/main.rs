use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use listing::{Host, Listing, TerminalHost};
use shelter::{Animal, AnimalSource, ApiClient, ApiConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the shelter API, overrides PIRRITX_API_URL
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every animal up for adoption
    List,
    /// Animals of one type, e.g. perro or gato
    Filter { tipo: String },
    /// Animals that need a home urgently
    Urgent,
    /// One animal by id
    Show { id: u64 },
    /// Shelter events
    Events,
    /// Share text for one animal
    Share { id: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = args.api_url.map(ApiConfig::new).unwrap_or_else(ApiConfig::load);
    let client = ApiClient::new(config);

    let mut listing = Listing::new(client.clone(), TerminalHost);

    match args.command {
        Command::List => {
            listing.load().await;
            print_listing(&listing);
        }
        Command::Filter { tipo } => {
            listing.filter_by_category(&tipo).await;
            print_listing(&listing);
        }
        Command::Urgent => {
            listing.filter_urgent().await;
            print_listing(&listing);
        }
        Command::Show { id } => {
            let animal = client
                .fetch_by_id(id)
                .await
                .with_context(|| format!("Fetching animal {id}"))?;

            print_animal(&animal);
            println!("{}", animal.descripcion);
            listing.view_details(&animal);
        }
        Command::Events => {
            let events = client.fetch_events().await.context("Fetching events")?;

            for event in events {
                println!(
                    "{} {}-{} {:<12} {}",
                    event.fecha_evento,
                    event.hora_inicio.format("%H:%M"),
                    event.hora_fin.format("%H:%M"),
                    event.tipo_evento,
                    event.lugar_evento
                );
            }
        }
        Command::Share { id } => {
            listing.load().await;

            let animal = listing
                .animals()
                .iter()
                .find(|animal| animal.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("No animal with id {id} in the listing"))?;

            let outcome = listing.share(&animal).await;
            info!("Share outcome: {outcome:?}");
        }
    }

    Ok(())
}

fn print_listing<S: AnimalSource, H: Host>(listing: &Listing<S, H>) {
    if let Some(banner) = listing.banner() {
        println!("{banner}\n");
    }

    for animal in listing.animals() {
        print_animal(animal);
    }
}

fn print_animal(animal: &Animal) {
    println!(
        "{:>4}  {:<12} {:<6} {:<14} {:>2} años  {:<8} {:<14}{}",
        animal.id,
        animal.nombre,
        animal.tipo_animal,
        animal.raza,
        animal.edad,
        animal.tamano,
        animal.estado_adopcion.as_str(),
        if animal.urgente { " URGENTE" } else { "" }
    );
}
