use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;

use rnplay::api::ApiClient;
use rnplay::commands;
use rnplay::env::Env;

const ISSUES_URL: &str = "https://github.com/rnplay/rnplay-cli/issues";

#[derive(Parser)]
#[command(
    name = "rnplay",
    version,
    about = "Create and manage rnplay.org apps from the terminal",
    long_about = "rnplay authenticates you against rnplay.org, creates remote git-backed\n\
                  apps for your projects, registers them as local git remotes, opens app\n\
                  pages in your browser, and can split one project into several apps."
)]
struct Cli {
    /// Save your rnplay.org API token and email
    #[arg(short = 'a', long)]
    authenticate: bool,

    /// Create an app for the current directory and add it as a git remote
    #[arg(short = 'c', long)]
    create: bool,

    /// Open the app linked to the current directory in a browser
    #[arg(short = 'o', long)]
    open: bool,

    /// Split this project into sub-projects declared in package.json
    #[arg(short = 's', long)]
    split: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{} Oops, something went wrong: {}", "✗".red().bold(), err);
        eprintln!("  If this keeps happening, please open an issue: {}", ISSUES_URL.dimmed());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let env = Env::from_process_env();
    let home = std::env::home_dir().context("could not determine home directory")?;
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let api = ApiClient::new(env.api_base());

    // The first requested action wins; combinations are not an error.
    if cli.authenticate {
        commands::authenticate::run(&home, &env)
    } else if cli.create {
        commands::create::run(&home, &cwd, &env, &api).await
    } else if cli.open {
        commands::open::run(&cwd, &env).await
    } else if cli.split {
        commands::split::run(&home, &cwd, &env, &api).await
    } else {
        Cli::command().print_help()?;
        println!();
        Ok(())
    }
}
