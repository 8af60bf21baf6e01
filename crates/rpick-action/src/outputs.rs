use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

use rpick_model::SelectionResult;

pub const OUTPUT_USE_RUNNER: &str = "use-runner";
pub const OUTPUT_PRIMARY_ONLINE: &str = "primary-online";
pub const OUTPUT_SUFFICIENT_PRIMARIES: &str = "sufficient-primaries";

/// Step outputs produced from a selection.
///
/// `use-runner` is always a JSON array of strings. `sufficient-primaries` is only
/// present when a quorum was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutputs {
    entries: Vec<(&'static str, String)>,
}

impl ActionOutputs {
    pub fn from_result(result: &SelectionResult, with_quorum: bool) -> Self {
        let mut entries = vec![
            (OUTPUT_USE_RUNNER, result.use_runner_json()),
            (OUTPUT_PRIMARY_ONLINE, result.primary_online.to_string()),
        ];
        if with_quorum {
            entries.push((
                OUTPUT_SUFFICIENT_PRIMARIES,
                result.sufficient_primaries.to_string(),
            ));
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Write `name=value` lines.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (name, value) in &self.entries {
            writeln!(w, "{name}={value}")?;
        }
        w.flush()
    }

    /// Append to the step output file, or print to stdout when there is none.
    pub fn write(&self, output_file: Option<&Path>) -> io::Result<()> {
        match output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                self.write_to(&mut file)
            }
            None => self.write_to(&mut io::stdout().lock()),
        }
    }
}
