use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use chrono::Timelike;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::clock::clock_errors::ClockError;

// Aceita de 0:00:00 (ou 00:00:00) até 24:59:59.
// O limite de 24 existe para representar a meia-noite como 24:00:00;
// combinações como 24:59:59 passam também.
static SUPPORTED_TIME_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0?[0-9]|1[0-9]|2[0-4]):[0-5][0-9]:[0-5][0-9]$").expect("Padrão regex inválido")
});

/// Horário já validado, decomposto em horas, minutos e segundos.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeValue
{
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl fmt::Debug for TimeValue
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for TimeValue
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Verifica se a string está no formato `H:MM:SS` ou `HH:MM:SS` suportado pelo relógio.
pub fn is_supported_time_format(raw: &str) -> bool
{
    SUPPORTED_TIME_FORMAT.is_match(raw)
}

impl TimeValue
{
    /// Valida e decompõe o horário. Só chega no parse depois que a regex aceitou a entrada.
    pub fn parse(raw: &str) -> Result<Self, ClockError>
    {
        if !is_supported_time_format(raw)
        {
            return Err(ClockError::invalid_format(raw));
        }

        let mut parts = raw.split(':').map(parse_validated_segment);

        // A regex garante exatamente três segmentos numéricos
        let hours = parts.next().unwrap_or_default();
        let minutes = parts.next().unwrap_or_default();
        let seconds = parts.next().unwrap_or_default();

        Ok(TimeValue { hours, minutes, seconds })
    }
}

// Segmento com 1 ou 2 dígitos ASCII, então não existe caminho de falha nem overflow.
fn parse_validated_segment(segment: &str) -> u8
{
    segment.bytes().fold(0u8, |acc, digit| {
        debug_assert!(digit.is_ascii_digit(), "segmento não validado: {:?}", segment);
        acc * 10 + (digit - b'0')
    })
}

impl FromStr for TimeValue
{
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        TimeValue::parse(s)
    }
}

impl From<NaiveTime> for TimeValue
{
    fn from(time: NaiveTime) -> Self
    {
        // hour() <= 23 e minute()/second() <= 59; segundo bissexto (nanos >= 1s) continua em 59
        TimeValue {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second() as u8,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn accepts_one_and_two_digit_hours()
    {
        for raw in ["0:00:00", "00:00:00", "7:05:09", "09:30:00", "13:17:01", "23:59:59", "24:00:00"]
        {
            assert!(is_supported_time_format(raw), "deveria aceitar {}", raw);
        }
    }

    #[test]
    fn accepts_hour_24_with_any_minutes_and_seconds()
    {
        assert!(is_supported_time_format("24:59:59"));
        assert_eq!(TimeValue::parse("24:59:59").unwrap(), TimeValue { hours: 24, minutes: 59, seconds: 59 });
    }

    #[test]
    fn rejects_malformed_strings()
    {
        let rejected = [
            "", "abc", "25:00:00", "12:60:00", "12:00:60", "12:3:4", "123:00:00", "12-00-00", "12:00", " 12:00:00",
            "12:00:00 ", "12:00:00\n", "12:00:00:00", "+1:00:00", "1a:00:00",
        ];

        for raw in rejected
        {
            assert!(!is_supported_time_format(raw), "deveria rejeitar {:?}", raw);
            assert_eq!(TimeValue::parse(raw), Err(ClockError::invalid_format(raw)));
        }
    }

    #[test]
    fn parses_components()
    {
        let time: TimeValue = "7:05:09".parse().unwrap();
        assert_eq!(time, TimeValue { hours: 7, minutes: 5, seconds: 9 });
        assert_eq!(time.to_string(), "07:05:09");
        assert_eq!(format!("{:?}", time), "07:05:09");
    }

    #[test]
    fn converts_from_naive_time()
    {
        let naive = NaiveTime::from_hms_opt(21, 4, 33).unwrap();
        assert_eq!(TimeValue::from(naive), TimeValue { hours: 21, minutes: 4, seconds: 33 });
    }
}
