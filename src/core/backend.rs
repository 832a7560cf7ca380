// backend.rs - Backends that execute external library calls

use super::call::LibraryCall;
use std::fmt::Debug;
use std::path::PathBuf;
use std::process::Command;

/// Environment variable naming the Python interpreter
pub const PYTHON_ENV_VAR: &str = "SIGTOOLS_PYTHON";
pub const DEFAULT_PYTHON: &str = "python3";

/// Python side of the bridge: decode the call from argv[1], resolve the
/// dotted function inside the module and invoke it.
const PYTHON_BOOTSTRAP: &str = r#"import importlib, json, sys
call = json.loads(sys.argv[1])
target = importlib.import_module(call["module"])
for attr in call["function"].split("."):
    target = getattr(target, attr)
target(*call["args"], **call["kwargs"])
"#;

/// Something able to run a `LibraryCall` to completion
pub trait AnalysisBackend: Debug {
    /// Get a human-readable name for this backend
    fn name(&self) -> &'static str;

    /// Run the call; errors carry a message naming the call
    fn invoke(&self, call: &LibraryCall) -> Result<(), String>;

    /// Whether running through this backend touches the filesystem
    fn writes_output(&self) -> bool {
        true
    }
}

/// Runs calls through a Python interpreter in a child process
#[derive(Debug, Clone)]
pub struct PythonBackend {
    interpreter: PathBuf,
}

impl PythonBackend {
    pub fn new(interpreter: PathBuf) -> Self {
        Self { interpreter }
    }

    /// Pick the interpreter: `--python`, then $SIGTOOLS_PYTHON, then the
    /// config file value, then python3
    pub fn locate(requested: Option<&str>, configured: Option<&str>) -> Result<Self, String> {
        let from_env = std::env::var(PYTHON_ENV_VAR).ok().filter(|v| !v.trim().is_empty());
        let name = requested
            .map(str::to_string)
            .or(from_env)
            .or_else(|| configured.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());

        let interpreter = which::which(&name)
            .map_err(|e| format!("Python interpreter '{}' not found: {}", name, e))?;
        Ok(Self::new(interpreter))
    }

    /// Command that would run `call`, without spawning it
    pub fn command(&self, call: &LibraryCall) -> Result<Command, String> {
        let mut command = Command::new(&self.interpreter);
        command.arg("-c").arg(PYTHON_BOOTSTRAP).arg(call.to_json()?);
        Ok(command)
    }
}

impl AnalysisBackend for PythonBackend {
    fn name(&self) -> &'static str {
        "python"
    }

    fn invoke(&self, call: &LibraryCall) -> Result<(), String> {
        println!("🐍 {} → {}", self.interpreter.display(), call.target());

        let status = self
            .command(call)?
            .status()
            .map_err(|e| format!("Failed to start {}: {}", self.interpreter.display(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(match status.code() {
                Some(code) => format!("{} failed with exit status {}", call.target(), code),
                None => format!("{} was terminated by a signal", call.target()),
            })
        }
    }
}

/// Prints the call instead of running it
#[derive(Debug, Clone, Default)]
pub struct DryRunBackend;

impl AnalysisBackend for DryRunBackend {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn writes_output(&self) -> bool {
        false
    }

    fn invoke(&self, call: &LibraryCall) -> Result<(), String> {
        println!("🔍 Dry run, the following call would be made:");
        println!("{}", call.to_json_pretty()?);
        Ok(())
    }
}

/// Backend selected by the runtime options
pub fn select_backend(
    python: Option<&str>,
    configured_python: Option<&str>,
    dry_run: bool,
) -> Result<Box<dyn AnalysisBackend>, String> {
    if dry_run {
        Ok(Box::new(DryRunBackend))
    } else {
        Ok(Box::new(PythonBackend::locate(python, configured_python)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_carries_bootstrap_and_payload() {
        let backend = PythonBackend::new(PathBuf::from("/usr/bin/python3"));
        let call = LibraryCall::new("SigProfilerExtractor.sigpro", "sigProfilerExtractor").arg("vcf");
        let command = backend.command(&call).unwrap();

        assert_eq!(command.get_program(), "/usr/bin/python3");
        let args: Vec<String> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], "-c");
        assert!(args[1].contains("importlib.import_module"));
        assert_eq!(args[2], call.to_json().unwrap());
    }

    #[test]
    fn test_missing_interpreter_is_an_error() {
        let err = PythonBackend::locate(Some("/nonexistent/sigtools-python"), None).unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_dry_run_selection() {
        let backend = select_backend(Some("/nonexistent/python"), None, true).unwrap();
        assert_eq!(backend.name(), "dry-run");
        assert!(backend.invoke(&LibraryCall::new("m", "f")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_interpreter_reports_status() {
        // `false` ignores its arguments and exits 1
        if let Ok(path) = which::which("false") {
            let backend = PythonBackend::new(path);
            let err = backend.invoke(&LibraryCall::new("m", "f")).unwrap_err();
            assert_eq!(err, "m.f failed with exit status 1");
        }
    }
}
