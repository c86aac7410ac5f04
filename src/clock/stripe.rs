use crate::clock::time_value::TimeValue;

/// Intervalo usado para destacar os quartos de hora na faixa principal de minutos.
const MAIN_MINUTE_STRIPE_HIGHLIGHT_INTERVAL: usize = 3;

/// Estado de uma lâmpada do relógio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lamp
{
    Off,
    Yellow,
    Red,
}

impl Lamp
{
    pub fn symbol(self) -> char
    {
        match self
        {
            Lamp::Off => 'O',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }

    pub fn is_on(self) -> bool
    {
        self != Lamp::Off
    }
}

/// Função que decide o estado de uma lâmpada a partir da sua posição na faixa.
pub type LampPolicy = fn(usize) -> Lamp;

pub fn inactive_lamp(_lamp_index: usize) -> Lamp
{
    Lamp::Off
}

/// Horas são sempre vermelhas.
pub fn active_hour_lamp(_lamp_index: usize) -> Lamp
{
    Lamp::Red
}

/// Segundos e faixa secundária de minutos são sempre amarelos.
pub fn active_yellow_lamp(_lamp_index: usize) -> Lamp
{
    Lamp::Yellow
}

/// Amarelo, com vermelho a cada terceira lâmpada (quarto de hora).
pub fn active_minute_main_lamp(lamp_index: usize) -> Lamp
{
    if (lamp_index + 1) % MAIN_MINUTE_STRIPE_HIGHLIGHT_INTERVAL == 0
    {
        Lamp::Red
    }
    else
    {
        Lamp::Yellow
    }
}

/// Constrói uma faixa com `lamps_count` lâmpadas.
///
/// Na faixa principal acendem `value / unit_per_lamp` lâmpadas, na secundária
/// `value % unit_per_lamp`. As primeiras lâmpadas (por índice) acendem e o resto fica apagado.
pub fn build_stripe(
    lamps_count: usize,
    unit_per_lamp: u8,
    value: u8,
    is_sub_stripe: bool,
    active: LampPolicy,
    inactive: LampPolicy,
) -> Vec<Lamp>
{
    let active_lamps = usize::from(if is_sub_stripe { value % unit_per_lamp } else { value / unit_per_lamp });

    (0..lamps_count)
        .map(|lamp_index| if lamp_index < active_lamps { active(lamp_index) } else { inactive(lamp_index) })
        .collect()
}

/// As cinco faixas do relógio, na ordem em que são exibidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe
{
    Seconds,
    HoursMain,
    HoursSub,
    MinutesMain,
    MinutesSub,
}

impl Stripe
{
    pub const ALL: [Stripe; 5] = [
        Stripe::Seconds,
        Stripe::HoursMain,
        Stripe::HoursSub,
        Stripe::MinutesMain,
        Stripe::MinutesSub,
    ];

    pub fn lamps_count(self) -> usize
    {
        match self
        {
            Stripe::Seconds => 1,
            Stripe::HoursMain | Stripe::HoursSub | Stripe::MinutesSub => 4,
            Stripe::MinutesMain => 11,
        }
    }

    pub fn unit_per_lamp(self) -> u8
    {
        match self
        {
            Stripe::Seconds => 2,
            _ => 5,
        }
    }

    pub fn is_sub_stripe(self) -> bool
    {
        matches!(self, Stripe::Seconds | Stripe::HoursSub | Stripe::MinutesSub)
    }

    pub fn active_policy(self) -> LampPolicy
    {
        match self
        {
            Stripe::Seconds | Stripe::MinutesSub => active_yellow_lamp,
            Stripe::HoursMain | Stripe::HoursSub => active_hour_lamp,
            Stripe::MinutesMain => active_minute_main_lamp,
        }
    }

    /// Componente do horário que a faixa exibe.
    pub fn value_of(self, time: &TimeValue) -> u8
    {
        match self
        {
            Stripe::Seconds => time.seconds,
            Stripe::HoursMain | Stripe::HoursSub => time.hours,
            Stripe::MinutesMain | Stripe::MinutesSub => time.minutes,
        }
    }

    pub fn build(self, time: &TimeValue) -> Vec<Lamp>
    {
        build_stripe(
            self.lamps_count(),
            self.unit_per_lamp(),
            self.value_of(time),
            self.is_sub_stripe(),
            self.active_policy(),
            inactive_lamp,
        )
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn symbols(lamps: &[Lamp]) -> String
    {
        lamps.iter().map(|lamp| lamp.symbol()).collect()
    }

    #[test]
    fn main_stripe_lights_quotient()
    {
        let lamps = build_stripe(4, 5, 13, false, active_hour_lamp, inactive_lamp);
        assert_eq!(symbols(&lamps), "RROO");
    }

    #[test]
    fn sub_stripe_lights_remainder()
    {
        let lamps = build_stripe(4, 5, 13, true, active_hour_lamp, inactive_lamp);
        assert_eq!(symbols(&lamps), "RRRO");
    }

    #[test]
    fn seconds_lamp_is_on_for_odd_seconds()
    {
        assert_eq!(symbols(&build_stripe(1, 2, 59, true, active_yellow_lamp, inactive_lamp)), "Y");
        assert_eq!(symbols(&build_stripe(1, 2, 58, true, active_yellow_lamp, inactive_lamp)), "O");
    }

    #[test]
    fn minute_main_marks_quarters_in_red()
    {
        let lamps = build_stripe(11, 5, 59, false, active_minute_main_lamp, inactive_lamp);
        assert_eq!(symbols(&lamps), "YYRYYRYYRYY");

        let quarter = build_stripe(11, 5, 15, false, active_minute_main_lamp, inactive_lamp);
        assert_eq!(symbols(&quarter), "YYROOOOOOOO");
    }

    #[test]
    fn active_count_never_exceeds_lamps()
    {
        for hours in 0..=24u8
        {
            for minutes in 0..=59u8
            {
                for seconds in [0u8, 1, 58, 59]
                {
                    let time = TimeValue { hours, minutes, seconds };
                    for stripe in Stripe::ALL
                    {
                        let value = stripe.value_of(&time);
                        let unit = stripe.unit_per_lamp();
                        let expected_on = usize::from(if stripe.is_sub_stripe() { value % unit } else { value / unit });

                        let lamps = stripe.build(&time);
                        assert!(expected_on <= stripe.lamps_count(), "{:?} em {}", stripe, time);
                        assert_eq!(lamps.len(), stripe.lamps_count());
                        assert_eq!(lamps.iter().filter(|lamp| lamp.is_on()).count(), expected_on);
                    }
                }
            }
        }
    }

    #[test]
    fn lit_lamps_come_first()
    {
        let time = TimeValue { hours: 17, minutes: 38, seconds: 3 };
        for stripe in Stripe::ALL
        {
            let lamps = stripe.build(&time);
            let first_off = lamps.iter().position(|lamp| !lamp.is_on()).unwrap_or(lamps.len());
            assert!(lamps[first_off..].iter().all(|lamp| !lamp.is_on()), "{:?}", stripe);
        }
    }
}
