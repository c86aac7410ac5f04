use env_logger::Builder;
use env_logger::Env;
use log::SetLoggerError;

/// Inicializa o env_logger. `RUST_LOG` tem prioridade; senão usa `level` (padrão "info").
pub fn init_logger(level: Option<&str>) -> Result<(), SetLoggerError>
{
    let default_level = level.unwrap_or("info");

    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init()
}
