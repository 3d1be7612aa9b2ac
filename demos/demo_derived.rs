use longopt::derive::*;

#[derive(Debug, Default, Getopt)]
struct Parameters {
    #[getopt("verbose+")]
    verbose: i64,
    #[getopt("level:i")]
    level: i64,
    #[getopt("path=s@")]
    paths: Vec<String>,
    ratio: f64,
    dry_run: bool,
    #[getopt(skip)]
    _internal: u8,
}

fn main() {
    let (parameters, remaining) = Parameters::getopt_parse();
    println!("{parameters:?}");
    println!("remaining: {remaining:?}");
}
