// sigprofilerextractor.rs - SigProfilerExtractor entry point

use sigtools::tools::extractor;

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = extractor::run(&argv) {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}
