use slidepuzzle_cli::{logging, run, ui};

fn main() {
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    if let Err(e) = logging::init_logging() {
        let _ = ui::display_warning(&mut stderr, &format!("logging disabled: {}", e));
    }

    let code = run(std::env::args(), &mut stdout, &mut stderr);
    std::process::exit(code);
}
