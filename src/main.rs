use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_gql::GraphQlClient;
use slotbook_web::config::WebConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = WebConfig::from_env()?;

    // Create the client for the external appointment API
    let client = GraphQlClient::new(&config.graphql_endpoint)?;

    // Start the web frontend
    slotbook_web::start_server(config, client).await?;

    Ok(())
}
