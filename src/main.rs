use std::io::{self};

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use berlin_clock::BerlinClockConverter;
use berlin_clock::LogFacade;
use berlin_clock::TimeValue;
use chrono::Local;
use clap::Parser;
use cli::args::Args;
use cli::config::AppConfig;
use cli::runner::read_times;
use cli::runner::run_conversions;
use log::info;
mod cli;

fn main() -> Result<()>
{
    let args = Args::parse();

    // 1) .env + configuração + logger
    let config = AppConfig::from_env()
        .context("Erro ao carregar a configuração")?
        .with_overrides(args.log_level.clone(), args.format);
    berlin_clock::logging::init_logger(Some(&config.log_level)).context("Erro ao inicializar o logger")?;

    // 2) Horários a converter: --now, argumentos ou stdin
    let inputs = if args.now
    {
        let now = TimeValue::from(Local::now().time());
        info!("Usando o horário local: {}", now);
        vec![now.to_string()]
    }
    else if !args.times.is_empty()
    {
        args.times.clone()
    }
    else
    {
        read_times(io::stdin().lock()).context("Erro ao ler horários do stdin")?
    };

    let converter = BerlinClockConverter::new(LogFacade);
    let failures = run_conversions(&inputs, &converter, config.format, &mut io::stdout().lock(), &mut io::stderr())?;

    if failures > 0
    {
        bail!("{} de {} horário(s) inválido(s)", failures, inputs.len());
    }

    Ok(())
}
