//! Staged batch files encoded against a loaded catalog

use tempfile::TempDir;

use uplink::encoder::{encode_batch, EncodeWarning, StagedCommand};
use uplink::staging::StagedBatch;

use super::helpers::*;

#[test]
fn test_text_batch_file() {
    let catalog = load_library();
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "pass-12.txt",
        "# morning pass\nCMD100 45\nCMD000MODE SAFE\nCMD100 10\nCMD050\n",
    );

    let output = StagedBatch::read(&path).unwrap().encode(&catalog);

    assert_eq!(output.wire, vec!["100 45", "SAFE 100 10 50"]);
    assert!(output.warnings.is_empty());
}

#[test]
fn test_yaml_batch_file_keeps_enclosed_spaces() {
    let catalog = load_library();
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "pass-13.yaml",
        r#"
- id: CMD000MODE
  values: [SCI]
- id: CMD210
  values: ["  downlink at 14:05  "]
- id: CMD100
  values: [90]
"#,
    );

    let output = StagedBatch::read(&path).unwrap().encode(&catalog);

    assert_eq!(output.wire, vec!["SCI 210 \"downlink at 14:05\" 100 90"]);
}

#[test]
fn test_text_and_yaml_batches_agree() {
    let catalog = load_library();
    let dir = TempDir::new().unwrap();
    let text = write_file(
        dir.path(),
        "batch.txt",
        "CMD100 1\nCMD210 \"hi\"\nCMD000MODE SAFE\nCMD050\n",
    );
    let yaml = write_file(
        dir.path(),
        "batch.yml",
        "- id: CMD100\n  values: [1]\n- id: CMD210\n  values: [hi]\n- id: CMD000MODE\n  values: [SAFE]\n- id: CMD050\n",
    );

    let from_text = StagedBatch::read(&text).unwrap().encode(&catalog);
    let from_yaml = StagedBatch::read(&yaml).unwrap().encode(&catalog);

    assert_eq!(from_text.wire, from_yaml.wire);
    assert_eq!(from_text.wire, vec!["100 1 210 \"hi\"", "SAFE 50"]);
}

#[test]
fn test_batch_with_problems_still_encodes_the_rest() {
    let catalog = load_library();
    let staged = vec![
        StagedCommand::new("CMD100", ["45"]),
        StagedCommand::new("CMD999", ["x"]),
        StagedCommand::new("CMD210", Vec::<String>::new()),
    ];

    let output = encode_batch(&catalog, &staged);

    assert_eq!(output.wire, vec!["100 45 210 \"\""]);
    assert_eq!(
        output.warnings,
        vec![
            EncodeWarning::UnknownCommand {
                line: 2,
                command_id: "CMD999".to_string(),
            },
            EncodeWarning::ParameterCountMismatch {
                line: 3,
                command_id: "CMD210".to_string(),
                expected: 1,
                supplied: 0,
            },
        ]
    );
}
