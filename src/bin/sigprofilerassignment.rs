// sigprofilerassignment.rs - SigProfilerAssignment entry point

use sigtools::tools::assignment;

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = assignment::run(&argv) {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}
