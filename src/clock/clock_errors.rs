use thiserror::Error;

/// Mensagem fixa devolvida quando o horário não está no formato suportado.
pub const INVALID_TIME_FORMAT: &str = "Time must be a string between 0:00:00 (or 00:00:00) and 24:59:59.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError
{
    #[error("{}", INVALID_TIME_FORMAT)]
    InvalidTimeFormat
    {
        input: String,
    },
}

impl ClockError
{
    pub fn invalid_format(input: &str) -> Self
    {
        ClockError::InvalidTimeFormat { input: input.to_string() }
    }
}
