use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = mesopust_api::Args::parse();

	mesopust_api::run(args).await
}
