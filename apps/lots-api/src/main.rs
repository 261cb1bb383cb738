use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	dotenv::dotenv().ok();

	let args = lots_api::Args::parse();

	lots_api::run(args).await
}
