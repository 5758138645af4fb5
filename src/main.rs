//! s3publish CLI - publish a static build directory to S3
//!
//! Usage: s3publish <COMMAND> --env=<DEPLOY_ENV>
//!
//! Commands:
//!   publish  Gzip and upload build/static to the bucket
//!   check    Resolve configuration and count files without uploading

mod commands;
mod telemetry;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use s3publish::presentation::{Cli, Commands};

use commands::publish::PublishArgs;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = telemetry::init_tracing(cli.verbose) {
        eprintln!("[WARN] {}", e);
    }

    let result = match cli.command {
        Commands::Publish {
            deploy_env,
            dry_run,
            concurrency,
            acl,
            gzip_ext,
        } => {
            let args = PublishArgs {
                deploy_env,
                dry_run,
                concurrency,
                acl: acl.into(),
                gzip_ext,
            };
            commands::publish::cmd_publish(args, json).await
        }
        Commands::Check { deploy_env } => commands::check::cmd_check(deploy_env, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error::print_error(&e, json);
            ExitCode::FAILURE
        }
    }
}
