//! vault CLI - authenticate against a secrets server.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use commands::{ConnectionOverrides, Context};
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use vault_auth::{AuthArgs, AuthError, AuthOptions};

/// vault CLI - Authenticate against a secrets server.
#[derive(Parser)]
#[command(name = "vault")]
#[command(about = "Command-line client for a Vault-compatible secrets server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Address of the server (overrides VAULT_ADDR)
    #[arg(long, global = true)]
    address: Option<String>,

    /// PEM encoded CA certificate file used to verify the server
    #[arg(long, global = true)]
    ca_cert: Option<PathBuf>,

    /// Directory of PEM encoded CA certificates; takes precedence over --ca-cert
    #[arg(long, global = true)]
    ca_path: Option<PathBuf>,

    /// Do not verify TLS certificates
    #[arg(long, global = true)]
    insecure: bool,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = vault_auth::help::SYNOPSIS)]
    Auth(AuthFlags),
}

#[derive(Args)]
struct AuthFlags {
    /// Use an alternate auth method instead of a token
    #[arg(long)]
    method: Option<String>,

    /// List the auth methods enabled on the server
    #[arg(long = "methods")]
    list_methods: bool,

    /// Token to authenticate with; prompted for when omitted
    #[arg(value_name = "TOKEN")]
    args: Vec<String>,
}

impl From<AuthFlags> for AuthArgs {
    fn from(flags: AuthFlags) -> Self {
        AuthArgs {
            method: flags.method,
            list_methods: flags.list_methods,
            args: flags.args,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    let format = cli.format;

    // Bad arguments are reported before any configuration is read
    let Commands::Auth(flags) = cli.command;
    let options = match AuthOptions::try_from(AuthArgs::from(flags)) {
        Ok(options) => options,
        Err(e) => return fail(&e, &format),
    };

    let ctx = match Context::load(ConnectionOverrides {
        address: cli.address,
        ca_cert: cli.ca_cert,
        ca_path: cli.ca_path,
        insecure: cli.insecure,
    }) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::print_error(&format!("{:#}", e), &format);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging via observability crate
    observability::init_with_config(observability::LogConfig {
        service_name: "cli".into(),
        default_level: cli
            .log_level
            .unwrap_or_else(|| ctx.config.log_level.clone()),
        log_path: Some(ctx.paths.logs_dir().join("dev.jsonl")),
        also_stderr: false,
    });
    tracing::debug!(
        config_file = %ctx.paths.config_file().display(),
        config_file_present = ctx.paths.config_file().exists(),
        address = %ctx.config.address,
        "configuration loaded"
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            output::print_error(&format!("Error starting runtime: {}", e), &format);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(commands::auth(&ctx, options, &format)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e, &format),
    }
}

fn fail(err: &AuthError, format: &OutputFormat) -> ExitCode {
    tracing::debug!(error = ?err, "auth failed");
    output::print_error(&err.to_string(), format);
    ExitCode::from(err.exit_code() as u8)
}
