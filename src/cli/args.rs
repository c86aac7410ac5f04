use clap::Parser;

use crate::cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[clap(name = "berlin-clock", about = "Converte horários para o Relógio de Berlim (Mengenlehreuhr)")]
pub struct Args
{
    /// Horários no formato H:MM:SS ou HH:MM:SS (sem argumentos, lê do stdin)
    pub times: Vec<String>,

    /// Converter o horário local atual
    #[clap(long, conflicts_with = "times")]
    pub now: bool,

    /// Formato de saída: text, pretty ou json
    #[clap(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Nível de log (error, warn, info, debug, trace)
    #[clap(short, long)]
    pub log_level: Option<String>,
}
