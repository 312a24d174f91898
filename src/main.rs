fn main() {
    if let Err(err) = precancel::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
