fn main() {
    storyprompt::app::cli::run();
}
