//! `uplink render <id> [values...]` - render one staged command line

use anyhow::Result;

use crate::commands::common::{print_warnings, CatalogArgs, Workspace};
use crate::encoder::{render_line, EncodeWarning};

/// Render a single command and print the line to stdout
pub fn execute(args: &CatalogArgs, id: &str, values: &[String]) -> Result<()> {
    let ws = Workspace::open(args)?;
    let spec = ws.catalog.lookup(id)?;

    let (line, mismatch) = render_line(spec, values);
    if let Some(mismatch) = mismatch {
        print_warnings(&[EncodeWarning::ParameterCountMismatch {
            line: 1,
            command_id: spec.id.clone(),
            expected: mismatch.expected,
            supplied: mismatch.supplied,
        }]);
    }

    println!("{line}");
    Ok(())
}
