mod args;

use crate::args::{Args, Command};
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use deploy_key_lib::{Credentials, DeployKey, DeployKeyClient, LoggingMiddleware, RepoRef};
use log::Level;
use reqwest::Client;
use reqwest_middleware::ClientBuilder;
use std::fs::read_to_string;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let transport = ClientBuilder::new(Client::new())
        .with(LoggingMiddleware::new(Level::Debug))
        .build();
    let github = DeployKeyClient::with_base_url(
        transport,
        args.api_url.as_str(),
        RepoRef::new(&args.owner, &args.repo),
        &Credentials::new(&args.username, &args.password),
    )?;

    match args.command {
        Command::Find { title } => match github.find_key(&title).await? {
            Some(key) => print_key(&key),
            None => println!("no deploy key titled \"{}\" in {}", title, github.repo_ref()),
        },
        Command::Delete { id: Some(id), .. } => {
            github.delete_key(id).await?;
            println!("deleted key {}", id.to_string().yellow());
        }
        Command::Delete { id: None, title } => {
            let title = title.unwrap_or_default();
            match github.find_key(&title).await? {
                Some(key) => {
                    github.delete_key(key.id).await?;
                    println!("deleted key {} ({})", key.id.to_string().yellow(), key.title);
                }
                None => println!("no deploy key titled \"{}\" in {}", title, github.repo_ref()),
            }
        }
        Command::Create {
            title,
            key,
            key_file,
            read_write,
        } => {
            let key = match key_file {
                Some(path) => read_to_string(&path)
                    .with_context(|| format!("could not read {}", path.display()))?,
                None => key.unwrap_or_default(),
            };
            let key = github.create_key(&title, key.trim(), !read_write).await?;
            print_key(&key);
        }
    }

    Ok(())
}

fn print_key(key: &DeployKey) {
    println!(
        "{} ({}) [{}]",
        key.title.yellow(),
        key.id,
        if key.read_only { "read-only" } else { "read-write" },
    );
    println!("  {}", key.key);
    if !key.created_at.is_empty() {
        println!("  created {}", key.created_at);
    }
    if !key.url.is_empty() {
        println!("  {}", key.url);
    }
}
