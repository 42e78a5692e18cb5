//! Compare command handler

use crate::cli::{CompareArgs, OutputFormat};
use crate::error::Result;
use crate::output::OutputWriter;
use std::cmp::Ordering;
use sunset_core::Version;

/// Handle the compare command
pub fn handle_compare(args: CompareArgs, output: &mut OutputWriter) -> Result<()> {
    let a = Version::parse(&args.a)?;
    let b = Version::parse(&args.b)?;

    let symbol = ordering_symbol(a.cmp(&b));

    if output.format() == OutputFormat::Human {
        output.writeln(&format!("{} {} {}", a, symbol, b))
    } else {
        output.data(&serde_json::json!({
            "left": a,
            "right": b,
            "ordering": symbol,
        }))
    }
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    fn sink_output() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(io::sink()))
    }

    #[test]
    fn test_ordering_symbol() {
        assert_eq!(ordering_symbol(Ordering::Less), "<");
        assert_eq!(ordering_symbol(Ordering::Equal), "=");
        assert_eq!(ordering_symbol(Ordering::Greater), ">");
    }

    #[test]
    fn test_handle_compare() {
        let args = CompareArgs {
            a: "1.20".to_string(),
            b: "1.20.0".to_string(),
        };
        assert!(handle_compare(args, &mut sink_output()).is_ok());
    }

    #[test]
    fn test_handle_compare_malformed() {
        let args = CompareArgs {
            a: "1.20".to_string(),
            b: "latest".to_string(),
        };
        let err = handle_compare(args, &mut sink_output()).unwrap_err();
        assert!(matches!(err, Error::Core(_)));
    }
}
