use std::any::Any;

use longopt::{ConfigError, OptionParser};

fn main() {
    let mut count: i64 = 0;
    let mut name = String::default();
    let mut tiny: u8 = 0;

    let variables: Vec<(&str, &mut dyn Any)> = vec![
        ("count+", &mut count as &mut dyn Any),
        ("name=s", &mut name as &mut dyn Any),
    ];
    let parser = variables
        .into_iter()
        .fold(OptionParser::new(), |parser, (descriptor, variable)| {
            parser.add_any(descriptor, variable)
        })
        .build();
    let remaining = parser.parse();
    println!("count: {count}, name: {name:?}, remaining: {remaining:?}");

    match OptionParser::new().add_any("tiny=i", &mut tiny).build_parser() {
        Err(ConfigError::UnsupportedDestinationType(descriptor)) => {
            println!("'{descriptor}' cannot bind to a u8.");
        }
        _ => unreachable!("a u8 variable is not a supported destination"),
    }
}
