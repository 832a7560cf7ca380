// survivor_vcf_reheader.rs - SurvivorVcfReheader entry point

use sigtools::tools::reheader;

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = reheader::run(&argv) {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}
