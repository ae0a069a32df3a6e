//! This module contains the main entrypoint to the folio cli.

use self::{
	config::SiteConfig,
	export::{export, ExportOptions},
	fetch::fetch_submissions,
	serve::serve,
};
use clap::{Args, Parser};
use colored::Colorize;
use folio_deps::{
	anyhow::{self, Result},
	chrono::{self, Offset},
	reqwest, tokio,
};
use folio_feed::{render_error, FeedConfig, PageControl, SubmissionFeed};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod fetch;
mod page;
mod serve;

#[derive(Parser)]
#[clap(
	about = "Build and serve a portfolio site with a live Codeforces submissions feed.",
	setting = clap::AppSettings::DisableHelpSubcommand,
)]
enum Options {
	#[clap(name = "build")]
	Build(BuildOptions),
	#[clap(name = "submissions")]
	Submissions(SubmissionsOptions),
	#[clap(name = "serve")]
	Serve(ServeOptions),
}

#[derive(Parser)]
#[clap(about = "write the static site")]
#[clap(long_about = "write index.html, the section fragments and the client module to a directory")]
struct BuildOptions {
	#[clap(short, long, help = "the path to a config file", env = "FOLIO_CONFIG")]
	config: Option<PathBuf>,
	#[clap(short, long, help = "the directory to write the site to", default_value = "build")]
	out: PathBuf,
	#[clap(long, help = "the directory of section fragments")]
	fragments: Option<PathBuf>,
	#[clap(long, help = "the wasm-bindgen output for the client")]
	client: Option<PathBuf>,
	#[clap(flatten)]
	feed: FeedOverrides,
}

#[derive(Parser)]
#[clap(about = "print a page of submissions")]
#[clap(long_about = "fetch the submissions feed and print one page of it as html")]
struct SubmissionsOptions {
	#[clap(short, long, help = "the path to a config file", env = "FOLIO_CONFIG")]
	config: Option<PathBuf>,
	#[clap(short, long, help = "the page to print", default_value = "1")]
	page: usize,
	#[clap(flatten)]
	feed: FeedOverrides,
}

#[derive(Parser)]
#[clap(about = "serve a built site")]
struct ServeOptions {
	#[clap(short, long, default_value = "build")]
	dir: PathBuf,
	#[clap(long, default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
}

#[derive(Args)]
struct FeedOverrides {
	#[clap(long, help = "the codeforces handle", env = "FOLIO_HANDLE")]
	handle: Option<String>,
	#[clap(long, env = "FOLIO_PAGE_SIZE")]
	page_size: Option<usize>,
	#[clap(long, env = "FOLIO_MAX_SUBMISSIONS")]
	max_submissions: Option<usize>,
}

impl FeedOverrides {
	fn apply(self, config: &mut FeedConfig) {
		if let Some(handle) = self.handle {
			config.handle = handle;
		}
		if let Some(page_size) = self.page_size {
			config.page_size = page_size;
		}
		if let Some(max_submissions) = self.max_submissions {
			config.max_submissions = max_submissions;
		}
	}
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();
	let options = Options::parse();
	let result = match options {
		Options::Build(options) => cli_build(options),
		Options::Submissions(options) => cli_submissions(options),
		Options::Serve(options) => cli_serve(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_build(options: BuildOptions) -> Result<()> {
	let mut config = SiteConfig::load(options.config.as_deref())?;
	options.feed.apply(&mut config.props.feed);
	export(
		&config,
		&ExportOptions {
			out_dir: options.out,
			fragments_dir: options.fragments,
			client_dir: options.client,
		},
	)
}

fn cli_submissions(options: SubmissionsOptions) -> Result<()> {
	let mut config = SiteConfig::load(options.config.as_deref())?.props.feed;
	options.feed.apply(&mut config);
	let client = reqwest::Client::builder()
		.user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
		.build()?;
	let runtime = tokio::runtime::Runtime::new()?;
	let body = runtime.block_on(fetch_submissions(&client, &config));
	let offset = chrono::Local::now().offset().fix();
	let mut feed = SubmissionFeed::new(config);
	let result = body.and_then(|body| feed.load_json(&body, offset));
	match result {
		Ok(()) => {
			feed.apply(PageControl::Page(options.page));
			println!("{}", feed.render().render_to_string());
			tracing::info!(
				solved = feed.submissions().len(),
				page = feed.current_page(),
				"rendered submissions"
			);
			Ok(())
		}
		Err(error) => {
			println!("{}", render_error(&error).render_to_string());
			Err(anyhow::Error::new(error).context("failed to fetch submissions"))
		}
	}
}

fn cli_serve(options: ServeOptions) -> Result<()> {
	let runtime = tokio::runtime::Runtime::new()?;
	runtime.block_on(serve(options.dir, options.host, options.port))?;
	Ok(())
}
