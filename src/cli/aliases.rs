// aliases.rs - Multi-letter short flags and the no-arguments hint

/// Message shown when a tool is started without any argument
pub const NO_FLAGS_MESSAGE: &str =
    "Please re-run the command with \"-h\" to get usage instructions and a complete list of options\n";

/// Print the usage hint for an argument-less invocation
pub fn no_flags() {
    println!("{}", NO_FLAGS_MESSAGE);
}

/// Rewrite multi-letter single-dash flags (`-it`, `-eppm`, ...) into their long form.
///
/// clap only knows single-character short flags, so `-ep` would otherwise be
/// read as `-e -p`. Each `(short, long)` pair in `table` maps e.g. `-it` to
/// `--input_type`; the `-it=vcf` spelling is kept as `--input_type=vcf`.
/// Everything after a bare `--` is passed through untouched.
pub fn expand_short_aliases(argv: &[String], table: &[(&str, &str)]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(argv.len());
    let mut passthrough = false;

    for token in argv {
        if passthrough {
            expanded.push(token.clone());
            continue;
        }
        if token == "--" {
            passthrough = true;
            expanded.push(token.clone());
            continue;
        }

        let rewritten = table.iter().find_map(|(short, long)| {
            if token == short {
                Some(long.to_string())
            } else {
                token
                    .strip_prefix(short)
                    .and_then(|rest| rest.strip_prefix('='))
                    .map(|value| format!("{}={}", long, value))
            }
        });

        expanded.push(rewritten.unwrap_or_else(|| token.clone()));
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, &str)] = &[
        ("-it", "--input_type"),
        ("-ep", "--export_probabilities"),
        ("-eppm", "--export_probabilities_per_mutation"),
    ];

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expands_known_aliases() {
        let out = expand_short_aliases(&argv(&["-S", "in", "-it", "matrix", "-eppm"]), TABLE);
        assert_eq!(
            out,
            argv(&[
                "-S",
                "in",
                "--input_type",
                "matrix",
                "--export_probabilities_per_mutation"
            ])
        );
    }

    #[test]
    fn test_prefix_alias_does_not_swallow_longer_alias() {
        let out = expand_short_aliases(&argv(&["-ep", "-eppm"]), TABLE);
        assert_eq!(
            out,
            argv(&["--export_probabilities", "--export_probabilities_per_mutation"])
        );
    }

    #[test]
    fn test_equals_form_and_passthrough() {
        let out = expand_short_aliases(&argv(&["-it=vcf", "--", "-it"]), TABLE);
        assert_eq!(out, argv(&["--input_type=vcf", "--", "-it"]));
    }

    #[test]
    fn test_unknown_tokens_are_left_alone() {
        let out = expand_short_aliases(&argv(&["-itx", "-V", "value"]), TABLE);
        assert_eq!(out, argv(&["-itx", "-V", "value"]));
    }
}
