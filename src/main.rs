use std::process::ExitCode;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use anyscp::cli::{Cli, Command};
use anyscp::command::TransferMode;
use anyscp::config::Config;
use anyscp::endpoint::{split_target, EndpointSpec};
use anyscp::logging::init_tracing;
use anyscp::{Session, SizeResult, TransferOutcome, Transport};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    match &cli.command {
        Command::Cp { source, dest } => {
            let mode = TransferMode::from_interactive(cli.interactive || config.defaults.interactive);
            let mut transport = Transport::new().with_programs(cli.programs(&config.programs));
            let outcome = transport.copy(
                &EndpointSpec::from(source.as_str()),
                &EndpointSpec::from(dest.as_str()),
                mode,
            );
            report_transfer(&outcome, cli.json)
        }
        Command::Get {
            target,
            remote,
            local,
        } => {
            let mut session = open_session(cli, target, &config)?;
            report_transfer(&session.get(remote, local.as_deref()), cli.json)
        }
        Command::Put {
            target,
            local,
            remote,
        } => {
            let mut session = open_session(cli, target, &config)?;
            report_transfer(&session.put(local, remote.as_deref()), cli.json)
        }
        Command::Size { target, remote } => {
            let mut session = open_session(cli, target, &config)?;
            report_size(&session.size(remote), cli.json)
        }
    }
}

fn open_session(cli: &Cli, target: &str, config: &Config) -> Result<Session> {
    let (_, host) = split_target(target);
    ensure!(!host.is_empty(), "target '{}' has no host", target);

    let mut session = Session::from_target(target).with_config(config);
    session.set_programs(cli.programs(&config.programs));
    if let Some(user) = &cli.user {
        session.login(user);
    }
    if let Some(cwd) = &cli.cwd {
        session.cwd(cwd);
    }
    if cli.interactive {
        session.set_interactive(true);
    }
    Ok(session)
}

fn report_transfer(outcome: &TransferOutcome, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string(outcome)?);
    } else if !outcome.success {
        eprintln!("{}", outcome.error_message);
    }
    Ok(exit_code(outcome.success))
}

fn report_size(result: &SizeResult, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        match result {
            SizeResult::Bytes(n) => println!("{}", n),
            SizeResult::QueryFailed(reason) => eprintln!("{}", reason),
        }
    }
    Ok(exit_code(!result.is_failure()))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
