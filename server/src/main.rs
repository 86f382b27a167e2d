use todo_server::{logging, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    logging::init_logging(&config);
    todo_server::serve(&config).await
}
