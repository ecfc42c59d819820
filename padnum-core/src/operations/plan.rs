use crate::preview::{render_preview, Preview};
use crate::renamer::{PadOptions, PadReport};
use anyhow::Result;
use std::path::Path;

/// Plan operation - dry run plus an optional rendered preview
pub fn plan_operation(
    directory: &Path,
    width: usize,
    extension: Option<&str>,
    preview: Option<Preview>,
    use_color: Option<bool>,
) -> Result<(PadReport, Option<String>)> {
    let options = PadOptions::new(directory)
        .width(width)
        .extension(extension)
        .dry_run(true);
    let report = super::run_logged("plan", &options)?;

    let rendered = preview
        .filter(|p| *p != Preview::None)
        .map(|p| render_preview(&report, p, use_color));

    Ok((report, rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_plan_operation_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("3.png"), "").unwrap();

        let (report, rendered) = plan_operation(
            temp_dir.path(),
            3,
            None,
            Some(Preview::Table),
            Some(false),
        )
        .unwrap();

        assert_eq!(report.planned(), 1);
        assert!(temp_dir.path().join("3.png").exists());
        assert!(!temp_dir.path().join("003.png").exists());
        assert!(rendered.unwrap().contains("003.png"));
    }

    #[test]
    fn test_plan_operation_without_preview() {
        let temp_dir = TempDir::new().unwrap();
        let (_, rendered) =
            plan_operation(temp_dir.path(), 3, None, Some(Preview::None), None).unwrap();
        assert!(rendered.is_none());

        let (_, rendered) = plan_operation(temp_dir.path(), 3, None, None, None).unwrap();
        assert!(rendered.is_none());
    }

    #[test]
    fn test_plan_operation_logs_as_plan() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("3.png"), "").unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            plan_operation(temp_dir.path(), 3, None, None, None)
        })
        .unwrap();

        let text = logs.text();
        assert!(text.contains("starting plan run"));
        assert!(text.contains("plan run finished"));
        assert!(!text.contains("pad run"));
    }
}
