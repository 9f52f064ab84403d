use clap::{Arg, Command};

fn main() {
    let matches = Command::new("Mohr")
        .version("0.1.0")
        .about("Mohr circle construction and failure envelope fitting for triaxial soil tests")
        .arg(
            Arg::new("run")
                .short('r')
                .long("run")
                .help("Run the analysis with the given configuration file")
                .required(true),
        )
        .after_help(
            "The configuration file is YAML and holds the test pairs, the \
             canvas geometry and the report settings.",
        )
        .get_matches();
    if let Some(r) = matches.get_one::<String>("run") {
        if let Err(err) = mohr::app_logic::run(r) {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
