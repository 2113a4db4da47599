use std::net::SocketAddr;

use astrodata_server::Server;
use color_eyre::eyre::Error;

/// Run the star catalog service.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(long, env = "ASTRODATA_ADDRESS", default_value = "127.0.0.1:8000")]
    address: SocketAddr,
}

impl Args {
    pub async fn run(self) -> Result<(), Error> {
        let server = Server::new();

        let shutdown = server.shutdown_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutting down");
                shutdown.cancel();
            }
        });

        server.bind(self.address).await?;

        Ok(())
    }
}
