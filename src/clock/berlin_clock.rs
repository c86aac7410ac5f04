use std::fmt;

use crate::clock::stripe::Lamp;
use crate::clock::stripe::Stripe;
use crate::clock::time_value::TimeValue;

/// Estado das cinco faixas do relógio para um horário.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerlinClock
{
    time: TimeValue,
    stripes: [Vec<Lamp>; 5],
}

impl BerlinClock
{
    pub fn from_time(time: TimeValue) -> Self
    {
        let stripes = Stripe::ALL.map(|stripe| stripe.build(&time));
        BerlinClock { time, stripes }
    }

    pub fn time(&self) -> TimeValue
    {
        self.time
    }

    pub fn stripe(&self, stripe: Stripe) -> &[Lamp]
    {
        &self.stripes[stripe as usize]
    }

    /// Faixas na ordem de exibição.
    pub fn stripes(&self) -> impl Iterator<Item = (Stripe, &[Lamp])>
    {
        Stripe::ALL.into_iter().zip(self.stripes.iter().map(Vec::as_slice))
    }

    pub fn stripe_symbols(&self, stripe: Stripe) -> String
    {
        self.stripe(stripe).iter().map(|lamp| lamp.symbol()).collect()
    }

    /// Representação textual: uma linha por faixa, sem quebra de linha no final (32 caracteres).
    pub fn render(&self) -> String
    {
        let mut builder = String::with_capacity(32);

        for (position, stripe) in Stripe::ALL.into_iter().enumerate()
        {
            if position > 0
            {
                builder.push('\n');
            }
            builder.extend(self.stripe(stripe).iter().map(|lamp| lamp.symbol()));
        }

        builder
    }
}

impl fmt::Display for BerlinClock
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.render())
    }
}
