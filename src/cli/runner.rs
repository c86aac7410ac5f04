use std::io::BufRead;
use std::io::Write;

use anyhow::Result;
use berlin_clock::BerlinClockConverter;
use berlin_clock::ClockLog;
use colored::*;

use crate::cli::output::format_clock;
use crate::cli::output::separator;
use crate::cli::output::OutputFormat;

/// Converte cada entrada e escreve em `out`; entradas inválidas vão para `err` sem interromper as seguintes.
///
/// Devolve quantas entradas falharam.
pub fn run_conversions<L, O, E>(
    inputs: &[String],
    converter: &BerlinClockConverter<L>,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> Result<usize>
where
    L: ClockLog,
    O: Write,
    E: Write,
{
    let mut failures = 0;
    let mut printed = 0;

    for raw in inputs
    {
        match converter.convert(raw)
        {
            Ok(clock) =>
            {
                if printed > 0
                {
                    write!(out, "{}", separator(format))?;
                }
                writeln!(out, "{}", format_clock(&clock, format)?)?;
                printed += 1;
            },
            Err(e) =>
            {
                failures += 1;
                writeln!(err, "{} {}", format!("{:?}:", raw).red().bold(), e.to_string().red())?;
            },
        }
    }

    Ok(failures)
}

/// Uma entrada por linha, sem espaços nas pontas; linhas vazias são ignoradas.
pub fn read_times<R: BufRead>(reader: R) -> std::io::Result<Vec<String>>
{
    let mut times = Vec::new();

    for line in reader.lines()
    {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty()
        {
            times.push(trimmed.to_string());
        }
    }

    Ok(times)
}
