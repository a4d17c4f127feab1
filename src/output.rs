use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::generate::GeneratedOperation;
use crate::operation::OperationKind;

#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    pub kind: OperationKind,
    pub field: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedWrite {
    pub kind: OperationKind,
    pub field: String,
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct WriteReport {
    pub written: Vec<WrittenFile>,
    pub failed: Vec<FailedWrite>,
}

/// Writes each operation to `<out_dir>/<kind dir>/<file name>`.
///
/// A kind's directory is created before any of its files are written and a
/// failure there aborts with an error. Individual file failures are logged
/// and collected in the report; the remaining files are still written.
pub fn write_operations(
    out_dir: &Path,
    operations: &[GeneratedOperation],
) -> anyhow::Result<WriteReport> {
    let mut report = WriteReport::default();

    for kind in OperationKind::ALL {
        let batch: Vec<_> = operations.iter().filter(|op| op.kind == kind).collect();
        if batch.is_empty() {
            continue;
        }

        let dir = out_dir.join(kind.dir_name());
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
        tracing::debug!("created directory {}", dir.display());

        for op in batch {
            let path = dir.join(&op.file_name);
            match fs::write(&path, &op.contents) {
                Ok(()) => {
                    tracing::debug!("wrote {}", path.display());
                    report.written.push(WrittenFile {
                        kind,
                        field: op.field_name.clone(),
                        path,
                    });
                }
                Err(e) => {
                    tracing::error!("failed to write {}: {e}", path.display());
                    report.failed.push(FailedWrite {
                        kind,
                        field: op.field_name.clone(),
                        path,
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    Ok(report)
}
