use serde::Serialize;

use crate::{
    config::ShimConfig,
    emitter::{emit_class_header, emit_stub},
    error::ShimError,
    parser::parse_declarations,
    registry::{scan_classes, TypeRegistry},
    types::{DeclarationKind, Declaration, GenerationReport},
};

/// Stage-one result: every line as a typed node, plus the registry
/// frozen from all class headers in the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedFile {
    pub declarations: Vec<Declaration>,
    pub registry:     TypeRegistry,
}

/// Parses the whole input and builds the registry before anything is
/// emitted, so forward references to classes resolve.
pub fn parse_file(text: &str, config: &ShimConfig) -> ParsedFile {
    let declarations = parse_declarations(text);
    let registry     = scan_classes(&declarations, config);
    log::debug!(
        "parsed {} lines, registry holds {} types",
        declarations.len(),
        registry.len()
    );
    ParsedFile { declarations, registry }
}

/// Stage two: emits the shim module for an already parsed file.
pub fn emit_file(parsed: &ParsedFile, config: &ShimConfig) -> (String, GenerationReport) {
    let mut report        = GenerationReport::default();
    let mut output        = Vec::with_capacity(parsed.declarations.len());
    let mut current_class = None;

    for declaration in &parsed.declarations {
        match &declaration.kind {
            DeclarationKind::ClassHeader { name } => {
                log::trace!("line {}: entering class {}", declaration.line, name);
                current_class = Some(name.as_str());
                report.classes += 1;
                output.push(emit_class_header(name, config));
            }
            DeclarationKind::Function(signature) | DeclarationKind::Method(signature) => {
                match emit_stub(signature, &parsed.registry, config) {
                    Some(stub) => {
                        if signature.is_method {
                            report.methods += 1;
                        } else {
                            report.functions += 1;
                        }
                        output.push(stub);
                    }
                    None => report.skipped += 1,
                }
            }
            DeclarationKind::Constructor => {
                log::debug!(
                    "line {}: constructor of {} left as is",
                    declaration.line,
                    current_class.unwrap_or("<none>")
                );
                report.constructors += 1;
                output.push(declaration.text.clone());
            }
            DeclarationKind::Comment | DeclarationKind::Passthrough => {
                report.passthrough += 1;
                output.push(declaration.text.clone());
            }
        }
    }

    (output.join("\n"), report)
}

/// Runs both stages over `text`. Keeps a trailing newline if the input
/// had one.
pub fn generate_shims(text: &str, config: &ShimConfig) -> (String, GenerationReport) {
    let parsed = parse_file(text, config);
    let (mut shims, report) = emit_file(&parsed, config);
    if text.ends_with('\n') {
        shims.push('\n');
    }
    (shims, report)
}

/// Pretty JSON of the stage-one result.
pub fn dump_parsed_file(parsed: &ParsedFile) -> Result<String, ShimError> {
    serde_json::to_string_pretty(parsed).map_err(|e| ShimError::Serialize(e.to_string()))
}
