use std::path::Path;
use std::process;

fn main() {
    match favicon_gen::commands::generate::run(Path::new(".")) {
        Ok(report) => {
            if report.png.failed > 0 {
                eprintln!(
                    "{} of {} PNG outputs failed",
                    report.png.failed,
                    report.png.written + report.png.failed
                );
            }
            println!("Done.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
