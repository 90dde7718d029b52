use clap::{ArgGroup, Parser, Subcommand};
use deploy_key_lib::DEFAULT_API_URL;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "deploy-key", about = "Manage GitHub repository deploy keys")]
pub struct Args {
    #[clap(
        short = 'o',
        long = "owner",
        help = "Repository owner",
        env = "DEPLOY_KEY_OWNER"
    )]
    pub owner: String,

    #[clap(
        short = 'r',
        long = "repo",
        help = "Repository name",
        env = "DEPLOY_KEY_REPO"
    )]
    pub repo: String,

    #[clap(
        short = 'u',
        long = "username",
        help = "GitHub username",
        env = "DEPLOY_KEY_GITHUB_USERNAME"
    )]
    pub username: String,

    #[clap(
        short = 'p',
        long = "password",
        help = "GitHub password or personal access token",
        env = "DEPLOY_KEY_GITHUB_PASSWORD",
        hide_env_values = true
    )]
    pub password: String,

    #[clap(
        long = "api-url",
        help = "GitHub REST API base URL",
        env = "DEPLOY_KEY_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(name = "find", about = "Show the deploy key with the given title")]
    Find {
        #[clap(help = "Key title")]
        title: String,
    },

    #[clap(
        name = "delete",
        about = "Delete a deploy key by ID or title",
        group(ArgGroup::new("target").required(true).args(["id", "title"]))
    )]
    Delete {
        #[clap(help = "Key ID")]
        id: Option<u64>,

        #[clap(short = 't', long = "title", help = "Key title")]
        title: Option<String>,
    },

    #[clap(
        name = "create",
        about = "Create a deploy key",
        group(ArgGroup::new("material").required(true).args(["key", "key_file"]))
    )]
    Create {
        #[clap(help = "Key title")]
        title: String,

        #[clap(help = "Public key material")]
        key: Option<String>,

        #[clap(short = 'f', long = "key-file", help = "Read public key material from file")]
        key_file: Option<PathBuf>,

        #[clap(
            short = 'w',
            long = "read-write",
            help = "Grant write access",
            default_value = "false"
        )]
        read_write: bool,
    },
}
