//! Example renders a model to Go and TypeScript.
//!
//! Run with: `cargo run --example generate [model.json]`
//!
//! Without an argument the built-in user model is used. Set `RUST_LOG=debug`
//! to see collision renames.

use dtoforge::prelude::*;
use tracing_subscriber::EnvFilter;

const USER_MODEL: &str = r#"{
    "types": [
        {
            "kind": "enum",
            "name": "ColorEnum",
            "backing_kind": "integer",
            "cases": [
                {"name": "RED", "value": 0},
                {"name": "GREEN", "value": 1},
                {"name": "BLUE", "value": 2},
                {"name": "UNIFIED_ENUM_CASE", "value": 111}
            ]
        },
        {
            "kind": "enum",
            "name": "RoleEnum",
            "backing_kind": "string",
            "cases": [
                {"name": "ADMIN", "value": "admin"},
                {"name": "READER", "value": "reader"},
                {"name": "EDITOR", "value": "editor"},
                {"name": "UNIFIED_ENUM_CASE", "value": "one_one_one"}
            ]
        },
        {
            "kind": "record",
            "name": "User",
            "fields": [
                {"name": "id", "type_ref": {"primitive": "string"}},
                {"name": "themeColor", "type_ref": {"named": "ColorEnum"}},
                {"name": "role", "type_ref": {"named": "RoleEnum"}}
            ]
        }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => USER_MODEL.to_string(),
    };
    let model = TypeModel::from_json(&json)?;

    let targets = [
        Target::go(),
        Target::typescript(),
        Target::TypeScript(
            TypeScriptOptions::new()
                .enum_style(EnumStyle::UnionType)
                .file_name("generated.types.ts"),
        ),
    ];

    for result in Generator::new(&model).generate_all(&targets) {
        match result {
            Ok(file) => {
                println!("==> {} ({})", file.file_name, file.target.kind());
                println!("{}", file.content);
            }
            Err(e) => tracing::error!("{}", e),
        }
    }

    Ok(())
}
