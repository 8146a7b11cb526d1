use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Skiff - deploy and manage applications on skiff.app
#[derive(Parser, Debug)]
#[command(name = "skiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy an application to skiff.app
    Deploy {
        /// Project directory (defaults to the current directory)
        path: Option<PathBuf>,

        /// Force redeploy if the alias already exists
        #[arg(short, long)]
        force: bool,

        /// Set env var KEY=VALUE (repeatable)
        #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,

        /// CPU request (e.g. 500m)
        #[arg(long)]
        cpu: Option<String>,

        /// Memory request (e.g. 512Mi)
        #[arg(long)]
        memory: Option<String>,

        /// Container port (e.g. 3000)
        #[arg(long)]
        port: Option<String>,
    },

    /// Manage deployed applications
    #[command(subcommand)]
    Apps(AppsCommands),

    /// Manage managed databases
    #[command(subcommand)]
    Db(DbCommands),

    /// Manage secrets (global or per-deployment)
    #[command(subcommand)]
    Secrets(SecretsCommands),

    /// Create a new project from a template
    #[command(subcommand)]
    Create(CreateCommands),
}

#[derive(Subcommand, Debug)]
pub enum AppsCommands {
    /// List all deployed applications
    List,

    /// Delete an application by alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Update a deployment (env vars, replicas, sizing, port)
    Update {
        alias: String,

        /// Set env var KEY=VALUE (repeatable)
        #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,

        /// Desired number of replicas
        #[arg(long)]
        replicas: Option<u32>,

        /// CPU request/limit (e.g. 500m, 1)
        #[arg(long)]
        cpu: Option<String>,

        /// Memory request/limit (e.g. 256Mi, 512Mi)
        #[arg(long)]
        memory: Option<String>,

        /// Container port (1-65535)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DbCommands {
    /// List all managed databases
    List {
        /// Only print database names, one per line (for scripting)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Create a new database
    Create {
        /// Name of the database to create
        name: Option<String>,
    },

    /// Delete a database
    Delete {
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Suppress progress and success output (errors only)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Download a database dump
    Dump {
        name: String,

        /// Output file path (default: <name>.dump)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore a database from a dump file
    Restore {
        name: String,

        /// Path to the dump file to restore
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum SecretsCommands {
    /// List secrets
    List {
        /// List secrets for this deployment only (omit for global)
        #[arg(short, long)]
        deployment: Option<String>,
    },

    /// Create or update a secret (value from argument or stdin)
    Set {
        name: String,
        value: Option<String>,

        /// Attach secret to this deployment (omit for global)
        #[arg(short, long)]
        deployment: Option<String>,
    },

    /// Print a secret's value
    Get {
        name: String,

        /// Get a deployment-scoped secret
        #[arg(short, long)]
        deployment: Option<String>,
    },

    /// Delete a secret
    Delete {
        name: String,

        /// Delete a deployment-scoped secret
        #[arg(short, long)]
        deployment: Option<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CreateCommands {
    /// Create a new Go worker project from the starter template
    Worker {
        /// Project name (prompted when omitted)
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_deploy() {
        let cli = Cli::try_parse_from(["skiff", "deploy"]).unwrap();
        if let Commands::Deploy {
            path,
            force,
            env,
            cpu,
            memory,
            port,
        } = cli.command
        {
            assert_eq!(path, None);
            assert!(!force);
            assert!(env.is_empty());
            assert_eq!(cpu, None);
            assert_eq!(memory, None);
            assert_eq!(port, None);
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_deploy_with_args() {
        let cli = Cli::try_parse_from([
            "skiff", "deploy", "./myapp", "--force", "-e", "NODE_ENV=production", "-e",
            "LOG_LEVEL=info", "--cpu", "500m", "--memory", "512Mi", "--port", "3000",
        ])
        .unwrap();

        if let Commands::Deploy {
            path,
            force,
            env,
            cpu,
            memory,
            port,
        } = cli.command
        {
            assert_eq!(path, Some(PathBuf::from("./myapp")));
            assert!(force);
            assert_eq!(env, vec!["NODE_ENV=production", "LOG_LEVEL=info"]);
            assert_eq!(cpu.as_deref(), Some("500m"));
            assert_eq!(memory.as_deref(), Some("512Mi"));
            assert_eq!(port.as_deref(), Some("3000"));
        } else {
            panic!("Expected Deploy command");
        }
    }

    #[test]
    fn test_cli_parse_apps_list() {
        let cli = Cli::try_parse_from(["skiff", "apps", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Apps(AppsCommands::List)));
    }

    #[test]
    fn test_cli_parse_apps_delete_yes() {
        let cli = Cli::try_parse_from(["skiff", "apps", "delete", "myapp", "-y"]).unwrap();
        if let Commands::Apps(AppsCommands::Delete { alias, yes }) = cli.command {
            assert_eq!(alias, "myapp");
            assert!(yes);
        } else {
            panic!("Expected Apps Delete command");
        }
    }

    #[test]
    fn test_cli_parse_apps_update() {
        let cli = Cli::try_parse_from([
            "skiff", "apps", "update", "myapp", "--replicas", "3", "--port", "8080",
        ])
        .unwrap();
        if let Commands::Apps(AppsCommands::Update {
            alias,
            replicas,
            port,
            ..
        }) = cli.command
        {
            assert_eq!(alias, "myapp");
            assert_eq!(replicas, Some(3));
            assert_eq!(port, Some(8080));
        } else {
            panic!("Expected Apps Update command");
        }
    }

    #[test]
    fn test_cli_parse_db_list_quiet() {
        let cli = Cli::try_parse_from(["skiff", "db", "list", "-q"]).unwrap();
        if let Commands::Db(DbCommands::List { quiet }) = cli.command {
            assert!(quiet);
        } else {
            panic!("Expected Db List command");
        }
    }

    #[test]
    fn test_cli_parse_db_dump_with_output() {
        let cli =
            Cli::try_parse_from(["skiff", "db", "dump", "mydb", "-o", "backup.dump"]).unwrap();
        if let Commands::Db(DbCommands::Dump { name, output }) = cli.command {
            assert_eq!(name, "mydb");
            assert_eq!(output, Some(PathBuf::from("backup.dump")));
        } else {
            panic!("Expected Db Dump command");
        }
    }

    #[test]
    fn test_cli_parse_db_restore_requires_file() {
        assert!(Cli::try_parse_from(["skiff", "db", "restore", "mydb"]).is_err());

        let cli =
            Cli::try_parse_from(["skiff", "db", "restore", "mydb", "--file", "mydb.dump"]).unwrap();
        if let Commands::Db(DbCommands::Restore { name, file }) = cli.command {
            assert_eq!(name, "mydb");
            assert_eq!(file, PathBuf::from("mydb.dump"));
        } else {
            panic!("Expected Db Restore command");
        }
    }

    #[test]
    fn test_cli_parse_secrets_set_with_deployment() {
        let cli = Cli::try_parse_from([
            "skiff", "secrets", "set", "API_KEY", "hunter2", "-d", "myapp",
        ])
        .unwrap();
        if let Commands::Secrets(SecretsCommands::Set {
            name,
            value,
            deployment,
        }) = cli.command
        {
            assert_eq!(name, "API_KEY");
            assert_eq!(value.as_deref(), Some("hunter2"));
            assert_eq!(deployment.as_deref(), Some("myapp"));
        } else {
            panic!("Expected Secrets Set command");
        }
    }

    #[test]
    fn test_cli_parse_secrets_set_value_from_stdin() {
        let cli = Cli::try_parse_from(["skiff", "secrets", "set", "API_KEY"]).unwrap();
        if let Commands::Secrets(SecretsCommands::Set { value, .. }) = cli.command {
            assert_eq!(value, None);
        } else {
            panic!("Expected Secrets Set command");
        }
    }

    #[test]
    fn test_cli_parse_create_worker() {
        let cli = Cli::try_parse_from(["skiff", "create", "worker", "my-worker"]).unwrap();
        if let Commands::Create(CreateCommands::Worker { name }) = cli.command {
            assert_eq!(name.as_deref(), Some("my-worker"));
        } else {
            panic!("Expected Create Worker command");
        }
    }
}
