use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use etsyproxy::{
    cli, config, error,
    types::{AuthRequest, PkceSession},
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Etsy API (OAuth 2.0 PKCE)
    Auth(AuthOptions),

    /// Fetch one page of a shop's active listings
    Listings(ListingsOptions),

    /// Run the shop listings proxy server
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Etsy API key or client id from the developer portal
    /// (defaults to ETSY_CLIENT_ID)
    #[clap(long)]
    pub api_key: Option<String>,

    /// Redirect URI registered for the application
    #[clap(long, default_value = "http://localhost:9002")]
    pub redirect_uri: String,

    /// Space-separated OAuth scopes to request
    #[clap(
        long,
        value_delimiter = ' ',
        default_value = "listings_r listings_w shops_r shops_w"
    )]
    pub scopes: Vec<String>,

    /// PKCE code verifier length
    #[clap(long, default_value_t = 128)]
    pub verifier_length: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct ListingsOptions {
    /// Shop name to fetch listings for (defaults to ETSY_SHOP_NAME)
    #[clap(long)]
    pub shop_name: Option<String>,

    /// Maximum number of listings per page
    #[clap(long, default_value_t = 12)]
    pub limit: u64,

    /// Zero-based page to fetch
    #[clap(long, default_value_t = 0)]
    pub page: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address the proxy server binds to
    #[clap(long, default_value = "127.0.0.1:8080")]
    pub address: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => {
            let request = AuthRequest {
                api_key: opt.api_key.unwrap_or_else(config::etsy_client_id),
                redirect_uri: opt.redirect_uri,
                scopes: opt.scopes,
                verifier_length: opt.verifier_length,
            };
            let oauth_result: Arc<Mutex<Option<PkceSession>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result), request).await;
        }
        Command::Listings(opt) => cli::listings(opt.shop_name, opt.limit, opt.page).await,
        Command::Serve(opt) => cli::serve(opt.address).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
