// scripts/benchmark.rs
use cn_pde_pricer::analytics::bs_analytic;
use cn_pde_pricer::request::{OptionKind, PricingRequest};
use cn_pde_pricer::pricer::price;
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let log_level = std::env::var("CN_PDE_PRICER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        SystemInfo {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(&["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    grid_points: usize,
    time_steps: usize,
    time_ms: f64,
    fair_value: f64,
    analytic_value: f64,
    relative_error: f64,
    residual_norm: f64,
}

fn run_grid_sweeps() -> Vec<BenchmarkResult> {
    let grid_configs = [(100, 200), (400, 800), (800, 1600), (1600, 3200)];

    let mut results = Vec::new();

    for &(grid_points, time_steps) in &grid_configs {
        println!(
            "Pricing at-the-money call with grid_points={}, time_steps={}...",
            grid_points, time_steps
        );

        let mut request =
            PricingRequest::new("aapl", OptionKind::Call, 100.0, 100.0, 1.0, 0.2, 0.05);
        request.grid_size = Some(grid_points);
        request.time_steps = Some(time_steps);

        let start = Instant::now();
        let result = price(&request).expect("valid configuration");
        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let analytic = bs_analytic::bs_call_price(100.0, 100.0, 0.05, 0.2, 1.0);
        let relative_error = (result.fair_value - analytic).abs() / analytic;

        results.push(BenchmarkResult {
            name: format!("ATM call ({}x{})", grid_points, time_steps),
            grid_points,
            time_steps,
            time_ms,
            fair_value: result.fair_value,
            analytic_value: analytic,
            relative_error,
            residual_norm: result.diagnostics.residual_norm,
        });
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) {
    let mut file = File::create(filename).expect("could not create CSV file");

    writeln!(file, "# System Information").unwrap();
    writeln!(file, "# OS: {}", system_info.os).unwrap();
    writeln!(file, "# CPU: {}", system_info.cpu_model).unwrap();
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores).unwrap();
    writeln!(file, "# Rust Version: {}", system_info.rust_version).unwrap();
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    writeln!(
        file,
        "Benchmark,GridPoints,TimeSteps,Time_ms,FairValue,AnalyticValue,RelativeError,ResidualNorm"
    )
    .unwrap();

    for result in results {
        writeln!(
            file,
            "{},{},{},{:.3},{:.6},{:.6},{:.6},{:.3e}",
            result.name,
            result.grid_points,
            result.time_steps,
            result.time_ms,
            result.fair_value,
            result.analytic_value,
            result.relative_error,
            result.residual_norm
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    init_tracing();

    println!("cn-pde-pricer Grid Resolution Benchmark");
    println!("========================================\n");

    println!("Gathering system information...");
    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!();

    println!("Running grid resolution sweeps...");
    let results = run_grid_sweeps();

    println!("\n{:=<90}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<90}", "");
    println!(
        "{:<20} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Benchmark", "Time (ms)", "FairValue", "Analytic", "RelError", "Residual", "TimeSteps"
    );
    println!("{:-<90}", "");

    for result in &results {
        println!(
            "{:<20} {:>12.3} {:>12.4} {:>12.4} {:>12.4}% {:>12.3e} {:>12}",
            result.name,
            result.time_ms,
            result.fair_value,
            result.analytic_value,
            result.relative_error * 100.0,
            result.residual_norm,
            result.time_steps
        );
    }

    println!("{:=<90}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename);

    println!("\nBenchmark complete!");
    println!("Results saved to: {}", filename);
}
