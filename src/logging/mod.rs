//! Instrumentação básica do conversor.
//!
//! O conversor recebe um `ClockLog` pelo construtor. A implementação padrão
//! encaminha para o crate `log`; quem inicializa o logger é o binário.

use std::sync::Arc;

pub mod setup;

pub use setup::init_logger;

const LOG_TARGET: &str = "berlin_clock";

/// Destino das notificações do conversor: um `error` por falha de validação, um `debug` por conversão.
pub trait ClockLog
{
    fn debug(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Encaminha para os macros do crate `log` (thread-safe).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl ClockLog for LogFacade
{
    fn debug(&self, msg: &str)
    {
        log::debug!(target: LOG_TARGET, "Result:\n{}", msg);
    }

    fn error(&self, msg: &str)
    {
        log::error!(target: LOG_TARGET, "{}", msg);
    }
}

/// Descarta tudo.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentLog;

impl ClockLog for SilentLog
{
    fn debug(&self, _msg: &str) {}

    fn error(&self, _msg: &str) {}
}

impl<T: ClockLog + ?Sized> ClockLog for &T
{
    fn debug(&self, msg: &str)
    {
        (**self).debug(msg)
    }

    fn error(&self, msg: &str)
    {
        (**self).error(msg)
    }
}

impl<T: ClockLog + ?Sized> ClockLog for Box<T>
{
    fn debug(&self, msg: &str)
    {
        (**self).debug(msg)
    }

    fn error(&self, msg: &str)
    {
        (**self).error(msg)
    }
}

impl<T: ClockLog + ?Sized> ClockLog for Arc<T>
{
    fn debug(&self, msg: &str)
    {
        (**self).debug(msg)
    }

    fn error(&self, msg: &str)
    {
        (**self).error(msg)
    }
}
