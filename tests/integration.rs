//! Integration tests for Kairo
//!
//! End-to-end tests that load editor documents and run them.
//!
mod common;
use common::*;
use kairo::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_editor_document_runs_end_to_end() {
        let blueprint =
            Blueprint::from_json(EDITOR_BLUEPRINT_JSON).expect("Failed to parse blueprint");
        assert_eq!(blueprint.nodes.len(), 9);
        assert_eq!(blueprint.wires.len(), 9);

        let report = seeded().run_blueprint(&blueprint);
        assert_eq!(report.outcome, RunOutcome::Completed);
        assert_eq!(
            report.lines(),
            vec!["11", "12", "done", "---", "  counter: 2"]
        );
    }

    #[test]
    fn test_editor_document_fields_are_read() {
        let blueprint = Blueprint::from_json(EDITOR_BLUEPRINT_JSON).unwrap();
        let set = blueprint.node("n3").expect("set node");
        assert_eq!(set.kind, NodeKind::Flow(FlowKind::SetVariable));
        assert_eq!(set.comment, "loop bound");
        assert_eq!(set.x, 200.0);

        let each = blueprint.node("n5").expect("loop node");
        let body = each.output("Loop Body").expect("body pin");
        assert_eq!(body.id, "n5_OUTPUT_Loop Body_0");
        assert_eq!(body.data_type, DataType::Exec);
        assert_eq!(body.direction, PinDirection::Output);
    }

    #[test]
    fn test_document_without_entry() {
        let blueprint = Blueprint::from_json(NO_ENTRY_JSON).unwrap();
        let lines = execute_blueprint(&blueprint);
        assert_eq!(lines, vec!["Error: \"Begin Play\" entry node not found."]);
    }

    #[test]
    fn test_builder_output_round_trips_through_json() {
        let mut fx = Fixture::new();
        let begin = fx.begin.clone();
        let each = fx.add(FlowKind::ForLoop);
        fx.set(&each, "end", 2);
        fx.wire(&begin, "", &each, "");
        fx.print_after(&each, "Loop Body", &each, "Index");
        let blueprint = fx.builder.build();

        let json = serde_json::to_string_pretty(&blueprint).expect("serialize");
        assert!(json.contains("\"type\": \"ForLoop\""));
        assert!(json.contains("\"fromPinId\""));

        let restored = Blueprint::from_json(&json).expect("deserialize");
        assert_eq!(restored, blueprint);
        assert_eq!(
            execute_blueprint(&restored),
            execute_blueprint(&blueprint)
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("kairo_integration_blueprint.json");
        fs::write(&path, EDITOR_BLUEPRINT_JSON).expect("write temp file");

        let blueprint =
            Blueprint::from_file(path.to_str().unwrap()).expect("Failed to load blueprint");
        assert_eq!(blueprint.nodes.len(), 9);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Blueprint::from_file("/nonexistent/kairo/blueprint.json");
        match result {
            Err(DocumentError::Io { path, .. }) => {
                assert_eq!(path, "/nonexistent/kairo/blueprint.json")
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = Blueprint::from_json("{ \"nodes\": [ { \"id\": 1 } ] }");
        assert!(matches!(result, Err(DocumentError::JsonParseError(_))));

        let unknown_kind = r#"{ "nodes": [ { "id": "x", "type": "Teleport", "title": "?" } ] }"#;
        assert!(Blueprint::from_json(unknown_kind).is_err());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let blueprint = Blueprint::from_json("{}").unwrap();
        assert!(blueprint.nodes.is_empty());
        assert!(blueprint.wires.is_empty());
    }

    #[test]
    fn test_run_config_from_partial_json() {
        let config: RunConfig = serde_json::from_str(r#"{ "max_steps": 25, "seed": 3 }"#).unwrap();
        assert_eq!(config.max_steps, 25);
        assert_eq!(config.max_loop_iterations, 1000);
        assert_eq!(config.seed, Some(3));

        let interpreter = Interpreter::builder().with_config(config).build();
        assert_eq!(interpreter.config(), &config);
    }

    #[test]
    fn test_interpreter_is_reusable_across_runs() {
        let blueprint = Blueprint::from_json(EDITOR_BLUEPRINT_JSON).unwrap();
        let interpreter = seeded();
        let first = interpreter.run_blueprint(&blueprint).into_lines();
        let second = interpreter.run_blueprint(&blueprint).into_lines();
        assert_eq!(first, second);
    }
}
