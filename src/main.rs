fn main() {
    let code = haydn::run_cli();
    if code != 0 {
        std::process::exit(code);
    }
}
