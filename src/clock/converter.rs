use crate::clock::berlin_clock::BerlinClock;
use crate::clock::clock_errors::ClockError;
use crate::clock::time_value::TimeValue;
use crate::logging::ClockLog;
use crate::logging::LogFacade;

/// Converte um horário para a representação do Relógio de Berlim.
pub trait TimeConverter
{
    fn convert_time(&self, time_to_convert: &str) -> Result<String, ClockError>;
}

/// Conversor padrão. Não guarda estado entre chamadas; é `Send + Sync` sempre que o log for.
#[derive(Debug, Default, Clone)]
pub struct BerlinClockConverter<L: ClockLog = LogFacade>
{
    log: L,
}

impl<L: ClockLog> BerlinClockConverter<L>
{
    pub fn new(log: L) -> Self
    {
        BerlinClockConverter { log }
    }

    /// Valida, decompõe e monta as cinco faixas.
    ///
    /// Formato inválido: registra um `error` e devolve `ClockError::InvalidTimeFormat`.
    /// Sucesso: registra um `debug` com a representação final.
    pub fn convert(&self, time_to_convert: &str) -> Result<BerlinClock, ClockError>
    {
        let time = match TimeValue::parse(time_to_convert)
        {
            Ok(time) => time,
            Err(err) =>
            {
                self.log.error(&err.to_string());
                return Err(err);
            },
        };

        let clock = BerlinClock::from_time(time);
        self.log.debug(&clock.render());

        Ok(clock)
    }
}

impl<L: ClockLog> TimeConverter for BerlinClockConverter<L>
{
    fn convert_time(&self, time_to_convert: &str) -> Result<String, ClockError>
    {
        self.convert(time_to_convert).map(|clock| clock.render())
    }
}
