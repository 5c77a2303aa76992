use std::{env, fs, path::{Path, PathBuf}, process::exit, time::Instant};

use lolparse::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: lolparse <file.lol | sample directory>");
        exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let files = if path.is_dir() {
        collect_samples(&path)
    } else {
        vec![path]
    };

    if files.is_empty() {
        eprintln!("No .lol files found");
        exit(2);
    }

    let mut failures = 0;
    for file in &files {
        if !run_file(file) {
            // a failed file never continues past its error; the next file does
            failures += 1;
        }
    }

    if failures > 0 {
        exit(1);
    }
}

fn collect_samples(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read sample directory!")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "lol"))
        .collect();
    files.sort();
    files
}

fn run_file(path: &Path) -> bool {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let source = fs::read_to_string(path).expect("Failed to read file!");

    println!("=== {} ===", file_name);

    let start = Instant::now();
    let tokens = tokenize(&source);
    println!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    for token in &tokens {
        token.debug();
    }

    let parse_start = Instant::now();
    match parse(tokens) {
        Ok(tree) => {
            println!("Parsed in {:?}", parse_start.elapsed());
            print!("{}", tree);
            true
        }
        Err(error) => {
            display_error(&error, &source, &file_name);
            false
        }
    }
}
