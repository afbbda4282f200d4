use budget_insights::{
    cli::{output, run_cli},
    init,
};

fn main() {
    init();

    if let Err(err) = run_cli(std::env::args().skip(1)) {
        output::error(err);
        std::process::exit(1);
    }
}
