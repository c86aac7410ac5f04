//! Conversão de horários para a representação do Relógio de Berlim (Mengenlehreuhr).
//!
//! O relógio mostra o horário em cinco faixas de lâmpadas:
//! segundos, horas (5 em 5), horas (1 em 1), minutos (5 em 5) e minutos (1 em 1).

pub mod clock;
pub mod logging;

pub use clock::berlin_clock::BerlinClock;
pub use clock::clock_errors::ClockError;
pub use clock::converter::BerlinClockConverter;
pub use clock::converter::TimeConverter;
pub use clock::stripe::Lamp;
pub use clock::stripe::Stripe;
pub use clock::time_value::TimeValue;
pub use logging::ClockLog;
pub use logging::LogFacade;
pub use logging::SilentLog;
