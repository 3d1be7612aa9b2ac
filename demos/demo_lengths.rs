use longopt::OptionParser;

fn main() {
    let mut length: i64 = 24;
    let mut data = "file.dat".to_string();
    let mut verbose = false;

    let parser = OptionParser::new()
        .add("length=i", &mut length)
        .add("files=s", &mut data)
        .add("verbose!", &mut verbose)
        .build();

    let remaining = parser.parse();
    println!("length: {length}, data: {data}, verbose: {verbose}");
    println!("remaining: {remaining:?}");
}
