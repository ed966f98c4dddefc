use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use infix_calc::render;

/// Reads arithmetic expressions, one per line, and prints their integer values
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Options {
    /// Expressions to evaluate instead of reading standard input
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn print_lines<W: Write>(out: &mut W, expr: &str) -> Result<()> {
    for line in render(expr) {
        writeln!(out, "{}", line).context("failed to write result")?;
    }
    Ok(())
}

/// Drops the "\n" or "\r\n" terminator. Invalid UTF-8 becomes U+FFFD, which
/// the evaluator then rejects as an illegal character for this line only
fn decode_line(buf: &[u8]) -> Cow<'_, str> {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    let buf = buf.strip_suffix(b"\r").unwrap_or(buf);
    String::from_utf8_lossy(buf)
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Options::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !opts.expressions.is_empty() {
        for expr in &opts.expressions {
            print_lines(&mut out, expr)?;
        }
        return Ok(());
    }

    info!("reading expressions from standard input");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();
    let mut count = 0usize;
    loop {
        buf.clear();
        let n = input
            .read_until(b'\n', &mut buf)
            .context("failed to read standard input")?;
        if n == 0 {
            break;
        }
        print_lines(&mut out, &decode_line(&buf))?;
        out.flush().context("failed to flush standard output")?;
        count += 1;
    }
    debug!("end of input after {} lines", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"1+1\n"), "1+1");
        assert_eq!(decode_line(b"1+1\r\n"), "1+1");
        assert_eq!(decode_line(b"1+1"), "1+1");
        assert_eq!(decode_line(b"\n"), "");
        assert_eq!(decode_line(b"2\xff3\n"), "2\u{fffd}3");
    }
}
