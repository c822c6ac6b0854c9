use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_CYAN: &str = "\x1b[36m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}i{} {}", FG_CYAN, BOLD, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}✔{} {}", FG_GREEN, BOLD, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}!{} {}", FG_YELLOW, BOLD, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}✘{} {}", FG_RED, BOLD, RESET, msg);
}

/// Aligned "label: value" row for the status view.
pub fn field<T: fmt::Display>(label: &str, value: T) {
    println!("  {}{:<12}{} {}", BOLD, label, RESET, value);
}
