// layoutprobe: struct padding, alignment and byte order inspector

use layoutprobe::inspector::engine::Inspector;
use layoutprobe::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("---- FUN WITH STRUCT ----\n");

    eprintln!("Probing byte order...");
    let mut inspector = match Inspector::new() {
        Ok(inspector) => inspector,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Detected {} byte order.", inspector.byte_order());

    eprintln!("Inspecting record layout...");
    let result = inspector.run();
    match &result {
        Ok(()) => {
            eprintln!("Inspection completed successfully.");
            eprintln!("Total snapshots: {}", inspector.snapshots().len());
        }
        Err(e) if e.is_fatal() => {
            eprintln!("Fatal: {}", e);
            std::process::abort();
        }
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            eprintln!("Printing partial transcript...");
        }
    }

    ui::print_transcript(inspector.transcript())?;

    if result.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
