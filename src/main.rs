fn main() {
    reelprompt::app::cli::run();
}
