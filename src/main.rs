//! Skiff CLI - command-line client for the skiff.app deployment platform
//!
//! Usage: skiff <COMMAND>
//!
//! Commands:
//!   deploy   Package and deploy an application
//!   apps     List and manage deployed applications
//!   db       Manage databases (list, create, delete, dump, restore)
//!   secrets  Manage secrets
//!   create   Scaffold a new project from a template

mod cli;
mod commands;

use clap::Parser;

use cli::{AppsCommands, Cli, Commands, CreateCommands, DbCommands, SecretsCommands};
use skiff::ui::{Icon, UiContext};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deploy {
            path,
            force,
            env,
            cpu,
            memory,
            port,
        } => commands::deploy::run(path, force, env, cpu, memory, port),
        Commands::Apps(command) => match command {
            AppsCommands::List => commands::apps::list(),
            AppsCommands::Delete { alias, yes } => commands::apps::delete(&alias, yes),
            AppsCommands::Update {
                alias,
                env,
                replicas,
                cpu,
                memory,
                port,
            } => commands::apps::update(&alias, env, replicas, cpu, memory, port),
        },
        Commands::Db(command) => match command {
            DbCommands::List { quiet } => commands::db::list(quiet),
            DbCommands::Create { name } => commands::db::create(name),
            DbCommands::Delete { name, yes, quiet } => commands::db::delete(&name, yes, quiet),
            DbCommands::Dump { name, output } => commands::db::dump(&name, output),
            DbCommands::Restore { name, file } => commands::db::restore(&name, &file),
        },
        Commands::Secrets(command) => match command {
            SecretsCommands::List { deployment } => commands::secrets::list(deployment),
            SecretsCommands::Set {
                name,
                value,
                deployment,
            } => commands::secrets::set(&name, value, deployment),
            SecretsCommands::Get { name, deployment } => commands::secrets::get(&name, deployment),
            SecretsCommands::Delete {
                name,
                deployment,
                yes,
            } => commands::secrets::delete(&name, deployment, yes),
        },
        Commands::Create(command) => match command {
            CreateCommands::Worker { name } => commands::create::worker(name),
        },
    };

    if let Err(err) = result {
        let ui = UiContext::detect(false);
        eprintln!("{} {err:#}", ui.icon(Icon::Error));
        std::process::exit(1);
    }
}
