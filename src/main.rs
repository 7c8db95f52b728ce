use nowplaying_card::config::Config;
use nowplaying_card::server::serve;
use nowplaying_init::init;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let config = Config::from_env()?;
    serve(config).await
}
