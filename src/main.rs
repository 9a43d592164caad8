use std::{env, fs::read_to_string, path::PathBuf, process::exit, rc::Rc, time::Instant};

use gifdsl::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: gifdsl <file>");
        exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            exit(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(file_contents, Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (_, parsed) = parse(tokens, Rc::new(String::from(file_name)));

    match parsed {
        Ok(program) => {
            println!("Parsed in {:?}", parse_start.elapsed());
            println!("{:#?}", program);
        }
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            exit(1);
        }
    }
}
