mod remove_duplicates;

use astrodata_client::ApiClient;
use astrodata_protocol::model::star::CreateStar;
use chrono::Utc;
use color_eyre::eyre::Error;
use url::Url;

use crate::admin::remove_duplicates::remove_duplicates;

/// Send administrative commands to the service API.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(long, short, env = "ASTRODATA_API_URL")]
    api_url: Url,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List the stars in the catalog.
    ListStars,

    /// Add a single star to the catalog.
    AddStar {
        #[arg(long)]
        name: String,

        /// Apparent magnitude (may be negative).
        #[arg(long, allow_hyphen_values = true)]
        magnitude: f64,

        /// Distance in light-years.
        #[arg(long)]
        distance: f64,

        #[arg(long)]
        spectral_type: String,
    },

    /// Delete records that repeat an existing name, keeping the lowest id of
    /// each name.
    RemoveDuplicates {
        /// Report what would be deleted without deleting anything.
        #[arg(long)]
        dry_run: bool,
    },
}

impl Args {
    pub async fn run(self) -> Result<(), Error> {
        let api = ApiClient::new(self.api_url);

        let status = api.status().await?;
        println!("Server version: {}", status.server_version);
        let uptime = Utc::now() - status.up_since;
        println!(
            "Uptime: {}d {}h {}m (since {})",
            uptime.num_days(),
            uptime.num_hours() % 24,
            uptime.num_minutes() % 60,
            status.up_since
        );

        if let Some(command) = self.command {
            match command {
                Command::ListStars => list_stars(&api).await?,
                Command::AddStar {
                    name,
                    magnitude,
                    distance,
                    spectral_type,
                } => {
                    let star = api
                        .create_star(&CreateStar {
                            name,
                            magnitude,
                            distance,
                            spectral_type,
                        })
                        .await?;
                    println!("Added {} (id: {})", star.name, star.id);
                }
                Command::RemoveDuplicates { dry_run } => {
                    remove_duplicates(&api, dry_run).await?
                }
            }
        }

        Ok(())
    }
}

async fn list_stars(api: &ApiClient) -> Result<(), Error> {
    let stars = api.get_stars().await?;

    if stars.is_empty() {
        println!("No stars in the catalog.");
        return Ok(());
    }

    println!(
        "{:>6}  {:<24} {:>10} {:>12}  {}",
        "id", "name", "magnitude", "distance", "spectral type"
    );
    for star in stars {
        println!(
            "{:>6}  {:<24} {:>10.2} {:>12.2}  {}",
            star.id, star.name, star.magnitude, star.distance, star.spectral_type
        );
    }

    Ok(())
}
