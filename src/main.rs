use std::process::ExitCode;

use pwd_entropy::{
    GeneratorOptions, analyze_password, ensure_plot_dir, format_time, generate_password,
    plot_crack_times, plot_entropy_heatmap, plot_strength_gauge,
};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Password Generator & Strength Checker ===");

    let options = GeneratorOptions {
        length: 16,
        ..Default::default()
    };
    let password = generate_password(&options)?;
    println!("\nGenerated Password: {password}");

    let report = analyze_password(&password)?;
    println!("Entropy: {:.2} bits", report.entropy_bits);
    println!("Strength: {}", report.category);

    println!("\nEstimated Crack Times:");
    for (label, seconds) in &report.crack_times {
        println!(" - {label}: {}", format_time(*seconds));
    }

    let dir = ensure_plot_dir()?;

    let gauge = dir.join("strength_gauge.svg");
    plot_strength_gauge(report.entropy_bits, &gauge)?;
    println!("\nSaved {}", gauge.display());

    let crack = dir.join("crack_times.svg");
    plot_crack_times(report.entropy_bits, &crack)?;
    println!("Saved {}", crack.display());

    let heatmap = dir.join("entropy_heatmap.svg");
    plot_entropy_heatmap(&heatmap)?;
    println!("Saved {}", heatmap.display());

    Ok(())
}

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
