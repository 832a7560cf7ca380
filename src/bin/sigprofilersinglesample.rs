// sigprofilersinglesample.rs - SigProfilerSingleSample entry point

use sigtools::tools::single_sample;

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = single_sample::run(&argv) {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}
