//! `custom-auth` CLI: fill in the sign-in or sign-up form and submit it to a
//! live backend.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use custom_auth::form::{CredentialForm, SubmitOutcome};
use custom_auth::nav::LogNavigator;
use custom_auth::{AuthApiConfig, ConfigError, FormError, HttpTransport, TransportError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("form input rejected: {0}")]
    Form(#[from] FormError),
}

#[derive(Parser, Debug)]
#[command(name = "custom-auth", about = "Sign in or sign up against the Custom Auth API")]
struct Cli {
    #[arg(long, env = "AUTH_BASE_URL")]
    base_url: String,

    #[arg(long, env = "AUTH_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    SignIn(SignInArgs),
    SignUp(SignUpArgs),
}

#[derive(Args, Debug)]
struct SignInArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct SignUpArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    user_name: String,

    #[arg(long)]
    email: String,

    #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let cli = Cli::parse();
    let config = AuthApiConfig::new(&cli.base_url, cli.request_timeout_secs)?;
    let transport = HttpTransport::new(&config)?;

    let (mut form, fields) = match cli.command {
        Command::SignIn(args) => {
            (CredentialForm::sign_in(), vec![("email", args.email), ("password", args.password)])
        }
        Command::SignUp(args) => (
            CredentialForm::sign_up(),
            vec![
                ("first_name", args.first_name),
                ("last_name", args.last_name),
                ("user_name", args.user_name),
                ("email", args.email),
                ("password", args.password),
            ],
        ),
    };
    for (name, value) in fields {
        form.set_field(name, value)?;
    }

    tracing::info!(form = form.spec().name, base_url = %config.base_url, "{}", form.submit_label());
    let outcome = form.submit(&transport, &LogNavigator).await;
    Ok(report(&form, outcome))
}

fn report(form: &CredentialForm, outcome: SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Succeeded { redirect: Some(path) } => {
            println!("ok: redirect to {path}");
            ExitCode::SUCCESS
        }
        SubmitOutcome::Succeeded { redirect: None } => {
            println!("ok");
            ExitCode::SUCCESS
        }
        SubmitOutcome::Invalid | SubmitOutcome::Failed | SubmitOutcome::Ignored => {
            for (field, message) in form.state().errors() {
                eprintln!("{field}: {message}");
            }
            ExitCode::FAILURE
        }
    }
}
