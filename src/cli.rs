//! Command-line dispatch.
//!
//! `netoverlap [version | help | <first-network-prefix> <second-network-prefix>]`
//!
//! Everything lives here rather than in `main.rs` so it can be tested with an
//! in-memory writer.

use crate::config::Settings;
use crate::evaluate;
use crate::output::format_result;
use std::error::Error;
use std::io::Write;

/// Placeholder for build flags that were not set at compile time.
pub const UNDEFINED: &str = "<undefined>";

pub const USAGE: &str = r#"Usage:

    This tool provides the overlap status between two given network prefixes of same type (IPv4 or IPv6)
    in their CIDR notation. It evaluates the second network prefix status from the first prefix
    perspective. The result of this check is either [<subset> or <superset> or <same> or <different>].

    netoverlap [version | help | <first-network-prefix> <second-network-prefix>]

    Examples:

    $ netoverlap 10.0.0.0/20 10.0.2.0/24
    $ netoverlap 10.0.2.0/24 10.0.3.0/24

    $ netoverlap ::/0 fe80:c845:ea23::/8
    $ netoverlap fd74:5909::/8 fe80::/64

    $ netoverlap help
    $ netoverlap version

    Environment:

    NETOVERLAP_OUTPUT      text (default) or json
    NETOVERLAP_COLOR       auto (default), always or never
    NETOVERLAP_LOG_CONFIG  log4rs config file (default log4rs.yml)
"#;

/// Build identity, captured at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub tag: &'static str,
    pub commit: &'static str,
    pub build_time: &'static str,
    pub contact: &'static str,
}

impl BuildInfo {
    /// Read `NETOVERLAP_GIT_TAG`, `NETOVERLAP_GIT_COMMIT` and
    /// `NETOVERLAP_BUILD_TIME` from the build environment.
    pub fn current() -> BuildInfo {
        BuildInfo {
            tag: option_env!("NETOVERLAP_GIT_TAG")
                .filter(|tag| !tag.is_empty())
                .unwrap_or(env!("CARGO_PKG_VERSION")),
            commit: or_undefined(option_env!("NETOVERLAP_GIT_COMMIT")),
            build_time: or_undefined(option_env!("NETOVERLAP_BUILD_TIME")),
            contact: or_undefined(option_env!("CARGO_PKG_REPOSITORY")),
        }
    }
}

/// Replace a missing or empty build flag with [`UNDEFINED`].
pub fn or_undefined(flag: Option<&'static str>) -> &'static str {
    match flag {
        Some(value) if !value.is_empty() => value,
        _ => UNDEFINED,
    }
}

fn write_version<W: Write>(out: &mut W, build: &BuildInfo) -> std::io::Result<()> {
    writeln!(
        out,
        "Version: {}\nGit commit: {}\nOS/Arch: {}/{}\nBuilt: {}\nContact: {}",
        build.tag,
        build.commit,
        std::env::consts::OS,
        std::env::consts::ARCH,
        build.build_time,
        build.contact
    )
}

/// Process the arguments (including the program name in `args[0]`), write the
/// result to `out` and return the process exit code.
pub fn execute<W: Write>(args: &[String], settings: &Settings, out: &mut W) -> i32 {
    log::info!("#Start execute({:?})", args.get(1..).unwrap_or_default());
    settings.color.apply();

    run(args, settings, out).unwrap_or_else(|e| {
        log::error!("Failed to write output: {e}");
        1
    })
}

fn run<W: Write>(args: &[String], settings: &Settings, out: &mut W) -> Result<i32, Box<dyn Error>> {
    let prog = args.first().map(String::as_str).unwrap_or("netoverlap");

    // Single argument: version, help or an unknown command.
    if let [_, command] = args {
        return match command.as_str() {
            "version" | "--version" | "-v" => {
                write_version(out, &BuildInfo::current())?;
                Ok(0)
            }
            "help" | "--help" | "-h" => {
                writeln!(out, "{USAGE}")?;
                Ok(0)
            }
            _ => {
                writeln!(out, "{prog} {command}: Unknown command. Run '{prog} help' for usage.")?;
                Ok(1)
            }
        };
    }

    let [_, first, second] = args else {
        writeln!(out, "Invalid syntax. Run '{prog} help' for usage.")?;
        return Ok(1);
    };

    let result = evaluate(first, second);
    let line = format_result(first, second, &result, settings.output)?;
    writeln!(out, "{line}")?;

    match result {
        Ok(status) => {
            log::info!("{first} -> {second}: {status}");
            Ok(0)
        }
        Err(_) => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn run_cli(args: &[&str]) -> (i32, String) {
        let args: Vec<String> = std::iter::once("netoverlap")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        let settings = Settings {
            color: ColorChoice::Never,
            ..Settings::default()
        };
        let mut buf = Vec::new();
        let code = execute(&args, &settings, &mut buf);
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_execute() {
        let cases: [(&str, &[&str], i32, &str); 11] = [
            ("valid [version] argument", &["version"], 0, "Version:"),
            ("valid [--version] argument", &["--version"], 0, "Version:"),
            ("valid [-v] argument", &["-v"], 0, "Version:"),
            ("valid [help] argument", &["help"], 0, "Usage:"),
            ("valid [--help] argument", &["--help"], 0, "Usage:"),
            ("valid [-h] argument", &["-h"], 0, "Usage:"),
            ("valid prefixes arguments", &["10.0.0.0/24", "10.0.0.0/8"], 0, "superset"),
            ("invalid [-x] argument", &["-x"], 1, "Unknown command"),
            ("invalid syntax", &["10.0.0.0/24", "10.0.0.0/8", "0.0.0.0/0"], 1, "Invalid syntax"),
            ("no arguments", &[], 1, "Invalid syntax"),
            ("invalid prefixes", &["10.0.0.0/24", "10.0.0.0"], 1, "failed"),
        ];

        for (name, args, expected_code, output_contains) in cases {
            let (code, output) = run_cli(args);
            assert_eq!(code, expected_code, "{name}");
            assert!(output.contains(output_contains), "{name}: {output}");
        }
    }

    #[test]
    fn test_execute_prints_bare_token() {
        assert_eq!(run_cli(&["10.0.2.0/24", "10.0.2.10/24"]), (0, "same\n".to_string()));
        assert_eq!(
            run_cli(&["fd74:5909::/8", "fe80::/64"]),
            (0, "different\n".to_string())
        );
    }

    #[test]
    fn test_unknown_command_names_program() {
        let (_, output) = run_cli(&["frobnicate"]);
        assert_eq!(
            output,
            "netoverlap frobnicate: Unknown command. Run 'netoverlap help' for usage.\n"
        );
    }

    #[test]
    fn test_version_fields() {
        let (_, output) = run_cli(&["version"]);
        for field in ["Version:", "Git commit:", "OS/Arch:", "Built:", "Contact:"] {
            assert!(output.contains(field), "missing {field} in {output}");
        }
    }

    #[test]
    fn test_or_undefined() {
        assert_eq!(or_undefined(None), "<undefined>");
        assert_eq!(or_undefined(Some("")), "<undefined>");
        assert_eq!(or_undefined(Some("c48f653")), "c48f653");
    }
}
