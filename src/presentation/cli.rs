//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.
//! `--env` is optional at the parser level so that configuration resolution
//! can report the descriptive "Must specify a deploy env" error.

use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};

use crate::application::publish::DEFAULT_CONCURRENCY;
use crate::domain::value_objects::ObjectAcl;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclArg {
    PublicRead,
    Private,
}

impl From<AclArg> for ObjectAcl {
    fn from(arg: AclArg) -> Self {
        match arg {
            AclArg::PublicRead => ObjectAcl::PublicRead,
            AclArg::Private => ObjectAcl::Private,
        }
    }
}

/// s3publish - publish static build assets to S3
#[derive(Parser, Debug)]
#[command(name = "s3publish")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Reads APP_NAME and REACT_APP_S3_BUCKET from the environment \
and credentials from ~/.aws-creds.json.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Gzip and upload build/static to the bucket
    Publish {
        /// Deploy environment (e.g. staging, prod)
        #[arg(long = "env", value_name = "DEPLOY_ENV")]
        deploy_env: Option<String>,

        /// Dry run - show what would be uploaded
        #[arg(long)]
        dry_run: bool,

        /// Maximum concurrent uploads
        #[arg(
            long,
            default_value_t = DEFAULT_CONCURRENCY,
            value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
        )]
        concurrency: usize,

        /// Canned ACL applied to every object
        #[arg(long, value_enum, default_value = "public-read")]
        acl: AclArg,

        /// Suffix appended to every destination key (e.g. .gz)
        #[arg(long, value_name = "SUFFIX")]
        gzip_ext: Option<String>,
    },

    /// Resolve configuration and list what would be published (no network)
    Check {
        /// Deploy environment (e.g. staging, prod)
        #[arg(long = "env", value_name = "DEPLOY_ENV")]
        deploy_env: Option<String>,
    },
}
