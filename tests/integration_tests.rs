//! Integration tests for depreview
//!
//! These tests verify:
//! - The review pipeline end to end with a scripted prompt
//! - Classification properties over analysis snapshots
//! - Manifest patch format preservation

use depreview::domain::{
    AnalysisErrorDetail, AnalysisSet, CategoryLabels, DependencyAnalysis, DiffSeverity,
    UpdateChoice,
};
use depreview::manifest::{serialize, ManifestDocument, ManifestPatcher};
use depreview::pipeline::{Pipeline, PipelineOutcome};
use depreview::prompt::{PromptKey, ScriptedPrompt};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("package.json");
    fs::write(&path, content).unwrap();
    path
}

fn run_pipeline(
    analysis: &AnalysisSet,
    path: &PathBuf,
    prompt: &mut ScriptedPrompt,
) -> (Result<PipelineOutcome, depreview::error::AppError>, String) {
    let labels = CategoryLabels::new();
    let document = ManifestDocument::load(path)
        .unwrap()
        .with_display_path("package.json");
    let mut output = Vec::new();
    let result = Pipeline::new(&labels, prompt).run(analysis, document, &mut output);
    (result, String::from_utf8(output).unwrap())
}

mod scenarios {
    use super::*;

    const LEFT_PAD_MANIFEST: &str = r#"{
  "name": "scenario",
  "dependencies": {
    "left-pad": "^1.0.0"
  }
}
"#;

    fn left_pad_analysis() -> AnalysisSet {
        AnalysisSet::new().with(
            "dependencies",
            "left-pad",
            DependencyAnalysis::not_latest("1.0.0", "1.0.1", "^1.0.1", DiffSeverity::Patch),
        )
    }

    /// Nothing outdated: one success line, no prompt, no write
    #[test]
    fn test_scenario_all_up_to_date() {
        let temp_dir = create_test_dir();
        let path = write_manifest(&temp_dir, LEFT_PAD_MANIFEST);
        let analysis =
            AnalysisSet::new().with("dependencies", "left-pad", DependencyAnalysis::ok("1.0.0"));
        let mut prompt = ScriptedPrompt::default();

        let (result, output) = run_pipeline(&analysis, &path, &mut prompt);

        assert_eq!(result.unwrap(), PipelineOutcome::AllUpToDate);
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("Dependencies are up to date"));
        assert_eq!(prompt.offered_items, 0);
        assert!(prompt.answer.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), LEFT_PAD_MANIFEST);
    }

    /// One outdated dependency selected and confirmed
    #[test]
    fn test_scenario_single_upgrade_confirmed() {
        let temp_dir = create_test_dir();
        let path = write_manifest(&temp_dir, LEFT_PAD_MANIFEST);
        let mut prompt = ScriptedPrompt::new([PromptKey::Toggle, PromptKey::Confirm]);

        let (result, output) = run_pipeline(&left_pad_analysis(), &path, &mut prompt);

        assert_eq!(
            result.unwrap(),
            PipelineOutcome::Updated {
                count: 1,
                dry_run: false
            }
        );
        assert_eq!(prompt.offered_items, 1);
        assert_eq!(
            prompt.answer.as_deref(),
            Some("? Choose which packages to update. left-pad")
        );

        let written = fs::read_to_string(&path).unwrap();
        let doc = ManifestDocument::parse(&written, &path).unwrap();
        assert_eq!(doc.range("dependencies", "left-pad"), Some("^1.0.1"));
        assert!(written.ends_with("}\n"));
        assert!(output.contains("Successfully updated package.json"));
    }

    /// Confirmed with nothing selected: no write at all
    #[test]
    fn test_scenario_empty_selection() {
        let temp_dir = create_test_dir();
        let path = write_manifest(&temp_dir, r#"{"dependencies":{"left-pad":"^1.0.0"}}"#);
        let mut prompt = ScriptedPrompt::new([PromptKey::Confirm]);

        let (result, output) = run_pipeline(&left_pad_analysis(), &path, &mut prompt);

        assert_eq!(result.unwrap(), PipelineOutcome::NoChanges);
        assert!(output.contains("No changes made to package.json."));
        // not even re-serialized
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"dependencies":{"left-pad":"^1.0.0"}}"#
        );
    }

    /// One failed analysis next to one outdated dependency
    #[test]
    fn test_scenario_error_and_pending() {
        let temp_dir = create_test_dir();
        let path = write_manifest(
            &temp_dir,
            r#"{"dependencies":{"broken":"^0.1.0","left-pad":"^1.0.0"}}"#,
        );
        let analysis = AnalysisSet::new()
            .with(
                "dependencies",
                "broken",
                DependencyAnalysis::failed(
                    AnalysisErrorDetail::new("package not found").with_code("E404"),
                ),
            )
            .with(
                "dependencies",
                "left-pad",
                DependencyAnalysis::not_latest("1.0.0", "1.0.1", "^1.0.1", DiffSeverity::Patch),
            );
        let mut prompt = ScriptedPrompt::new([PromptKey::Cancel]);

        let (result, output) = run_pipeline(&analysis, &path, &mut prompt);

        assert!(result.unwrap_err().is_cancelled());
        assert_eq!(output.matches('✗').count(), 1);
        assert!(output.contains("broken"));
        assert!(output.contains("package not found"));
        assert_eq!(prompt.offered_items, 1);
        assert!(prompt.last_page.iter().any(|line| line.contains("left-pad")));
        assert!(!prompt.last_page.iter().any(|line| line.contains("broken")));
    }
}

mod review_prompt {
    use super::*;

    /// Headers become separators and rows are ordered by severity
    #[test]
    fn test_prompt_page_layout() {
        let temp_dir = create_test_dir();
        let path = write_manifest(
            &temp_dir,
            r#"{"dependencies":{"axios":"^1.5.0","react":"^17.0.2"},"devDependencies":{"jest":"^29.7.0"}}"#,
        );
        let analysis = AnalysisSet::new()
            .with(
                "dependencies",
                "axios",
                DependencyAnalysis::not_latest("1.5.0", "1.6.0", "^1.6.0", DiffSeverity::Minor),
            )
            .with(
                "dependencies",
                "react",
                DependencyAnalysis::not_latest("17.0.2", "18.2.0", "^18.2.0", DiffSeverity::Major),
            )
            .with("devDependencies", "jest", DependencyAnalysis::ok("29.7.0"));
        let mut prompt = ScriptedPrompt::new([PromptKey::Confirm]);

        run_pipeline(&analysis, &path, &mut prompt).0.unwrap();

        let page = &prompt.last_page;
        let react = page.iter().position(|l| l.contains("react")).unwrap();
        let axios = page.iter().position(|l| l.contains("axios")).unwrap();
        assert!(react < axios, "major upgrades are listed first");
        assert!(page.iter().any(|l| l.contains("Dev Dependencies are up to date")));
        assert!(page.iter().any(|l| l.contains("Control-C to cancel")));
    }

    /// Selection order does not change the written manifest
    #[test]
    fn test_selection_order_independent() {
        let manifest = r#"{"dependencies":{"a":"^1.0.0","b":"^1.0.0"}}"#;
        let analysis = AnalysisSet::new()
            .with(
                "dependencies",
                "a",
                DependencyAnalysis::not_latest("1.0.0", "2.0.0", "^2.0.0", DiffSeverity::Major),
            )
            .with(
                "dependencies",
                "b",
                DependencyAnalysis::not_latest("1.0.0", "1.1.0", "^1.1.0", DiffSeverity::Minor),
            );

        let first = create_test_dir();
        let first_path = write_manifest(&first, manifest);
        let mut prompt = ScriptedPrompt::new([
            PromptKey::Toggle,
            PromptKey::Down,
            PromptKey::Toggle,
            PromptKey::Confirm,
        ]);
        run_pipeline(&analysis, &first_path, &mut prompt).0.unwrap();

        let second = create_test_dir();
        let second_path = write_manifest(&second, manifest);
        let mut prompt = ScriptedPrompt::new([
            PromptKey::Down,
            PromptKey::Toggle,
            PromptKey::Up,
            PromptKey::Toggle,
            PromptKey::Confirm,
        ]);
        run_pipeline(&analysis, &second_path, &mut prompt).0.unwrap();

        assert_eq!(
            fs::read_to_string(&first_path).unwrap(),
            fs::read_to_string(&second_path).unwrap()
        );
    }

    /// Toggling twice leaves an item unselected
    #[test]
    fn test_toggle_is_idempotent() {
        let temp_dir = create_test_dir();
        let path = write_manifest(&temp_dir, r#"{"dependencies":{"a":"^1.0.0"}}"#);
        let analysis = AnalysisSet::new().with(
            "dependencies",
            "a",
            DependencyAnalysis::not_latest("1.0.0", "1.0.1", "^1.0.1", DiffSeverity::Patch),
        );
        let mut prompt =
            ScriptedPrompt::new([PromptKey::Toggle, PromptKey::Toggle, PromptKey::Confirm]);

        let (result, _) = run_pipeline(&analysis, &path, &mut prompt);
        assert_eq!(result.unwrap(), PipelineOutcome::NoChanges);
    }
}

mod analysis_loading {
    use super::*;

    /// Snapshot files keep category and package order
    #[test]
    fn test_load_snapshot_from_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("analysis.json");
        fs::write(
            &path,
            r#"{
  "devDependencies": {
    "jest": {"status": "ok", "current": "29.7.0"}
  },
  "dependencies": {
    "react": {"status": "not-latest", "current": "17.0.2", "latest": "18.2.0", "latestRange": "^18.2.0", "diff": "major"},
    "ghost": {"status": "error", "error": {"message": "not found"}}
  }
}"#,
        )
        .unwrap();

        let set = AnalysisSet::load(&path).unwrap();
        let keys: Vec<_> = set.keys().collect();
        assert_eq!(keys, vec!["devDependencies", "dependencies"]);
        assert_eq!(set.total(), 3);

        let react = set.category("dependencies").unwrap().get("react").unwrap();
        assert!(react.is_not_latest());
        assert_eq!(react.diff, Some(DiffSeverity::Major));
        assert_eq!(react.target_range(), "^18.2.0");
    }
}

mod manifest_patching {
    use super::*;

    /// Untouched keys keep position and value through a patch
    #[test]
    fn test_patch_preserves_structure() {
        let original = r#"{
  "name": "keep-order",
  "version": "1.0.0",
  "scripts": {
    "test": "jest"
  },
  "dependencies": {
    "zod": "^3.0.0",
    "axios": "^1.5.0",
    "chalk": "^4.0.0"
  },
  "private": true
}
"#;
        let mut doc = ManifestDocument::parse(original, "package.json").unwrap();
        let rows = ManifestPatcher::new(false)
            .apply(&mut doc, &[UpdateChoice::new("dependencies", "axios", "^1.6.0")])
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(
            serialize(&doc.content).unwrap(),
            original.replace("^1.5.0", "^1.6.0")
        );
    }

    /// Empty choice list still rewrites canonically
    #[test]
    fn test_patch_empty_choices_normalizes_format() {
        let temp_dir = create_test_dir();
        let path = write_manifest(&temp_dir, "{\"a\":{\"b\":\"1\"}}");

        let doc = ManifestDocument::load(&path).unwrap();
        let report = ManifestPatcher::new(false).patch(doc, &[]).unwrap();

        assert_eq!(report.count(), 0);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"a\": {\n    \"b\": \"1\"\n  }\n}\n"
        );
    }
}
