use std::fs::File;
use std::fs::{self};
use std::hint::black_box;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use anyhow::Result;
use berlin_clock::BerlinClockConverter;
use berlin_clock::SilentLog;
use berlin_clock::TimeConverter;
use chrono::Local;
use clap::Parser;
use colored::*;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use rand::prelude::*;

#[derive(Parser, Debug)]
#[clap(name = "Berlin Clock Benchmark", about = "Benchmark do conversor do Relógio de Berlim")]
struct Args
{
    /// Número máximo de conversões
    #[clap(short, long, default_value = "5000000")]
    conversions: usize,

    /// Duração máxima do teste em segundos
    #[clap(short, long, default_value = "10")]
    duration: u64,

    /// Tamanho do lote medido de cada vez
    #[clap(short, long, default_value = "1000")]
    batch: usize,

    /// Percorrer todos os horários válidos em ordem, em vez de sortear
    #[clap(long)]
    sequential: bool,

    /// Incluir horários inválidos na amostra
    #[clap(long)]
    with_invalid: bool,
}

#[derive(Debug)]
struct LatencyStats
{
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
    p90: f64,
    p99: f64,
}

#[derive(Debug)]
struct BenchmarkResult
{
    conversions: usize,
    rejected: usize,
    total_time: f64,
    per_second: f64,
    latency_stats: Option<LatencyStats>,
}

// Diretório para salvar os resultados
const RESULTS_DIR: &str = "results";

const INVALID_SAMPLES: &[&str] = &["25:00:00", "12:60:00", "abc", "", "12:3:4", "12-00-00"];

fn main() -> Result<()>
{
    let args = Args::parse();

    println!(
        "{}\n{}: {}\n{}: {} {}\n{}: {}\n{}: {}",
        "Benchmark - Relógio de Berlim".green().bold(),
        "Conversões máximas".cyan(),
        args.conversions,
        "Duração máxima".cyan(),
        args.duration,
        "segundos".cyan(),
        "Amostragem".cyan(),
        if args.sequential { "Sequencial".yellow() } else { "Aleatória".green() },
        "Horários inválidos".cyan(),
        if args.with_invalid { "Sim".yellow() } else { "Não".green() }
    );

    let samples = build_samples(args.with_invalid);
    println!("{} horários na amostra\n", samples.len());

    let result = run_benchmark(&samples, &args);

    println!("\n{}\n", "Benchmark concluído!".green().bold());
    print_results(&result)?;

    Ok(())
}

/// Todos os horários aceitos (0:00:00 até 24:59:59), opcionalmente com entradas inválidas.
fn build_samples(with_invalid: bool) -> Vec<String>
{
    let mut samples = Vec::with_capacity(25 * 60 * 60 + INVALID_SAMPLES.len());

    for hours in 0..=24
    {
        for minutes in 0..60
        {
            for seconds in 0..60
            {
                samples.push(format!("{:02}:{:02}:{:02}", hours, minutes, seconds));
            }
        }
    }

    if with_invalid
    {
        samples.extend(INVALID_SAMPLES.iter().map(|s| s.to_string()));
    }

    samples
}

fn run_benchmark(samples: &[String], args: &Args) -> BenchmarkResult
{
    let converter = BerlinClockConverter::new(SilentLog);
    let mut rng = rand::thread_rng();

    let start_time = Instant::now();
    let end_time = start_time + Duration::from_secs(args.duration);
    let batch_size = args.batch.max(1);

    // Latência média por conversão em cada lote, em microssegundos
    let mut batch_latencies = Vec::with_capacity(args.conversions / batch_size + 1);

    let pb = ProgressBar::new(args.conversions as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed_precise}) {percent}% ({eta}) [conv/s: {msg}]")
            .unwrap()
            .progress_chars("►■□"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut done = 0;
    let mut rejected = 0;
    let mut cursor = 0;

    while Instant::now() < end_time && done < args.conversions
    {
        let size = std::cmp::min(batch_size, args.conversions - done);
        let batch_start = Instant::now();

        for _ in 0..size
        {
            let sample = if args.sequential
            {
                let sample = &samples[cursor];
                cursor = (cursor + 1) % samples.len();
                sample
            }
            else
            {
                // A amostra nunca é vazia
                samples.choose(&mut rng).unwrap_or(&samples[0])
            };

            if black_box(converter.convert_time(sample)).is_err()
            {
                rejected += 1;
            }
        }

        let elapsed = batch_start.elapsed().as_secs_f64();
        batch_latencies.push(elapsed * 1_000_000.0 / size as f64);
        done += size;

        pb.set_position(done as u64);
        pb.set_message(format!("{:.0}", done as f64 / start_time.elapsed().as_secs_f64()));
    }

    let total_time = start_time.elapsed().as_secs_f64();
    pb.finish_with_message(format!("Completo: {} conversões", done));

    let latency_stats = if batch_latencies.is_empty()
    {
        None
    }
    else
    {
        Some(LatencyStats {
            min: batch_latencies.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
            max: batch_latencies.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
            mean: batch_latencies.iter().sum::<f64>() / batch_latencies.len() as f64,
            median: percentile(&batch_latencies, 50.0),
            p90: percentile(&batch_latencies, 90.0),
            p99: percentile(&batch_latencies, 99.0),
        })
    };

    BenchmarkResult {
        conversions: done,
        rejected,
        total_time,
        per_second: if total_time > 0.0 { done as f64 / total_time } else { 0.0 },
        latency_stats,
    }
}

fn percentile(data: &[f64], percentile: f64) -> f64
{
    if data.is_empty()
    {
        return 0.0;
    }

    let mut sorted_data = data.to_vec();
    sorted_data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let index = (sorted_data.len() as f64 - 1.0) * (percentile / 100.0);
    let floor = index.floor() as usize;
    let ceil = index.ceil() as usize;

    if floor == ceil
    {
        return sorted_data[floor];
    }

    let weight = index - floor as f64;
    sorted_data[floor] * (1.0 - weight) + sorted_data[ceil] * weight
}

fn print_results(result: &BenchmarkResult) -> Result<()>
{
    println!("{:=^80}", " Resultados do Benchmark ");
    println!(
        "{:>12} | {:>10} | {:>14} | {:>9} | {:>9} | {:>9} | {:>9}",
        "Conversões", "Rejeitadas", "Conv/s", "Média", "Mediana", "p90", "p99"
    );
    println!("{:-<80}", "");

    match &result.latency_stats
    {
        Some(latency) => println!(
            "{:>12} | {:>10} | {:>14.0} | {:>7.3}µs | {:>7.3}µs | {:>7.3}µs | {:>7.3}µs",
            result.conversions,
            result.rejected,
            result.per_second,
            latency.mean,
            latency.median,
            latency.p90,
            latency.p99
        ),
        None => println!(
            "{:>12} | {:>10} | {:>14.0} | {:>9} | {:>9} | {:>9} | {:>9}",
            result.conversions, result.rejected, result.per_second, "N/A", "N/A", "N/A", "N/A"
        ),
    }

    // Salvar resultados em arquivo
    let results_dir = Path::new(RESULTS_DIR);
    if !results_dir.exists()
    {
        fs::create_dir_all(results_dir).context("Erro ao criar diretório de resultados")?;
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{}/benchmark_{}.txt", RESULTS_DIR, timestamp);
    let mut file = File::create(&filename)?;

    writeln!(file, "Resultados do Benchmark - {}", Local::now())?;
    writeln!(file, "{}", "=".repeat(50))?;
    writeln!(file, "Conversões: {}", result.conversions)?;
    writeln!(file, "Rejeitadas: {}", result.rejected)?;
    writeln!(file, "Tempo total: {:.3} s", result.total_time)?;
    writeln!(file, "Conversões por segundo: {:.0}", result.per_second)?;

    if let Some(latency) = &result.latency_stats
    {
        writeln!(file, "Latência mínima: {:.3} µs", latency.min)?;
        writeln!(file, "Latência média: {:.3} µs", latency.mean)?;
        writeln!(file, "Latência mediana: {:.3} µs", latency.median)?;
        writeln!(file, "Latência p90: {:.3} µs", latency.p90)?;
        writeln!(file, "Latência p99: {:.3} µs", latency.p99)?;
        writeln!(file, "Latência máxima: {:.3} µs", latency.max)?;
    }

    println!("\nResultados salvos em {}", filename.green());

    Ok(())
}
