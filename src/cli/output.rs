use berlin_clock::BerlinClock;
use berlin_clock::Lamp;
use berlin_clock::Stripe;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat
{
    /// Uma linha por faixa, com os símbolos O, Y e R
    Text,
    /// Lâmpadas coloridas no terminal
    Pretty,
    /// Um objeto JSON por horário
    Json,
}

#[derive(Debug, Serialize)]
struct ClockReport
{
    time: String,
    seconds: String,
    hours_main: String,
    hours_sub: String,
    minutes_main: String,
    minutes_sub: String,
    rendered: String,
}

impl From<&BerlinClock> for ClockReport
{
    fn from(clock: &BerlinClock) -> Self
    {
        ClockReport {
            time: clock.time().to_string(),
            seconds: clock.stripe_symbols(Stripe::Seconds),
            hours_main: clock.stripe_symbols(Stripe::HoursMain),
            hours_sub: clock.stripe_symbols(Stripe::HoursSub),
            minutes_main: clock.stripe_symbols(Stripe::MinutesMain),
            minutes_sub: clock.stripe_symbols(Stripe::MinutesSub),
            rendered: clock.render(),
        }
    }
}

pub fn format_clock(clock: &BerlinClock, format: OutputFormat) -> Result<String, serde_json::Error>
{
    match format
    {
        OutputFormat::Text => Ok(clock.render()),
        OutputFormat::Pretty => Ok(render_pretty(clock)),
        OutputFormat::Json => serde_json::to_string(&ClockReport::from(clock)),
    }
}

/// Separador entre horários consecutivos na saída.
pub fn separator(format: OutputFormat) -> &'static str
{
    match format
    {
        OutputFormat::Json => "",
        _ => "\n",
    }
}

fn render_pretty(clock: &BerlinClock) -> String
{
    let width = Stripe::MinutesMain.lamps_count() * 3;
    let header = format!("{:^width$}", clock.time().to_string(), width = width);
    let mut lines = vec![header.bold().to_string()];

    for (_, lamps) in clock.stripes()
    {
        let row: String = lamps.iter().map(|lamp| paint(*lamp).to_string()).collect();
        // Centraliza pelo número de lâmpadas, não pelo tamanho com códigos ANSI
        let padding = " ".repeat((width - lamps.len() * 3) / 2);
        lines.push(format!("{}{}", padding, row));
    }

    lines.join("\n")
}

fn paint(lamp: Lamp) -> ColoredString
{
    let cell = format!(" {} ", lamp.symbol());
    match lamp
    {
        Lamp::Off => cell.dimmed(),
        Lamp::Yellow => cell.black().on_yellow(),
        Lamp::Red => cell.white().on_red(),
    }
}

#[cfg(test)]
mod tests
{
    use berlin_clock::TimeValue;

    use super::*;

    fn clock() -> BerlinClock
    {
        BerlinClock::from_time(TimeValue { hours: 13, minutes: 17, seconds: 1 })
    }

    #[test]
    fn text_is_the_canonical_rendering()
    {
        assert_eq!(format_clock(&clock(), OutputFormat::Text).unwrap(), "Y\nRROO\nRRRO\nYYROOOOOOOO\nYYOO");
    }

    #[test]
    fn json_carries_every_stripe()
    {
        let json = format_clock(&clock(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["time"], "13:17:01");
        assert_eq!(value["seconds"], "Y");
        assert_eq!(value["hours_main"], "RROO");
        assert_eq!(value["hours_sub"], "RRRO");
        assert_eq!(value["minutes_main"], "YYROOOOOOOO");
        assert_eq!(value["minutes_sub"], "YYOO");
        assert_eq!(value["rendered"], "Y\nRROO\nRRRO\nYYROOOOOOOO\nYYOO");
    }

    #[test]
    fn pretty_has_a_header_and_five_stripes()
    {
        colored::control::set_override(false);
        let pretty = format_clock(&clock(), OutputFormat::Pretty).unwrap();
        let lines: Vec<&str> = pretty.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("13:17:01"));
        assert_eq!(lines[4].trim(), "Y  Y  R  O  O  O  O  O  O  O  O");
    }
}
