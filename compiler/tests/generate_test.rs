#![cfg(test)]

use indoc::indoc;
use pretty_assertions::assert_eq;

use remote_shims_compiler::{
    generate_shims, parse_file,
    types::{DeclarationKind, GenerationReport},
    MarshalCategory, ShimConfig,
};

const CLONIFIER: &str = include_str!("../../demos/clonifier.d.ts");
const CLONIFIER_SHIMS: &str = include_str!("../../demos/clonifier.shims.ts");

#[test]
fn test_generate_clonifier() {
    let (shims, report) = generate_shims(CLONIFIER, &ShimConfig::default());
    assert_eq!(shims, CLONIFIER_SHIMS);
    assert_eq!(
        report,
        GenerationReport {
            classes:      2,
            functions:    3,
            methods:      7,
            skipped:      2,
            constructors: 1,
            passthrough:  25,
        }
    );
}

#[test]
fn test_round_trip_scenario() {
    let input = "export class Foo {\nbar(x: Foo): Foo;\nfree(): void;\n}";
    let (shims, _) = generate_shims(input, &ShimConfig::default());
    let expected = indoc! {r#"
        export class Foo extends RemoteObj {
        bar(x: Foo): Promise<Foo> {
          return this.callMethod("bar", "obj", [x], ["obj"], []);
        }
        }"#};
    assert_eq!(shims, expected);
    assert!(!shims.contains("free"));
}

#[test]
fn test_unrecognized_lines_pass_through() {
    let input = indoc! {"
        export interface JsMatch {
          primer: any;
          start: number;
        }
        export type PcrSettings = {
          minFp: number;
        };

        declare const wasm: any;
        // export function hidden(a: number): number;
    "};
    let (shims, report) = generate_shims(input, &ShimConfig::default());
    assert_eq!(shims, input);
    assert_eq!(report.passthrough, 10);
    assert_eq!(report.functions + report.methods + report.classes, 0);
}

#[test]
fn test_forward_references_across_file() {
    let input = indoc! {"
        export function open(path: string): Document;
        export function merge(a: Document, b: Document): Document[];
        export class Page {
          owner(): Document;
        }
        export class Document {
          page(index: number): Page;
        }
    "};
    let parsed = parse_file(input, &ShimConfig::default());
    assert_eq!(parsed.registry.category_of("Document"), MarshalCategory::Object);
    assert_eq!(parsed.registry.category_of("Page"), MarshalCategory::Object);

    let (shims, _) = generate_shims(input, &ShimConfig::default());
    assert!(shims.contains(r#"workerCall("open", "obj", [path], ["val"], []);"#));
    assert!(shims.contains(r#"workerCall("merge", "obj_array", [a, b], ["obj", "obj"], []);"#));
    assert!(shims.contains(r#"this.callMethod("owner", "obj", [], [], []);"#));
    assert!(shims.contains(r#"this.callMethod("page", "obj", [index], ["val"], []);"#));
}

#[test]
fn test_every_line_becomes_one_node() {
    let parsed = parse_file(CLONIFIER, &ShimConfig::default());
    assert_eq!(parsed.declarations.len(), CLONIFIER.lines().count());

    let classes: Vec<&str> = parsed
        .declarations
        .iter()
        .filter_map(|d| match &d.kind {
            DeclarationKind::ClassHeader { name } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(classes, vec!["AssemblyResult", "Seq"]);
}

#[test]
fn test_custom_config() {
    let config = ShimConfig::from_json(
        r#"{
            "base_class": "WorkerObject",
            "global_dispatch": "callWorker",
            "method_dispatch": "this.call",
            "skip": ["free", "dispose"],
            "indent": "    "
        }"#,
    )
    .unwrap();
    let input = indoc! {"
        export function load(bytes: Uint8Array): Store;
        export class Store {
          dispose(): void;
          get(key: string): Promise<Uint8Array>;
        }
    "};
    let expected = indoc! {r#"
        export function load(bytes: ArrayBuffer): Promise<Store> {
            return callWorker("load", "obj", [bytes], ["binary"], [bytes]);
        }
        export class Store extends WorkerObject {
          get(key: string): Promise<Uint8Array> {
              return this.call("get", "binary", [key], ["val"], []).then(ab => new Uint8Array(ab));
          }
        }
    "#};
    let (shims, report) = generate_shims(input, &config);
    assert_eq!(shims, expected);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_class_named_like_binary_builtin() {
    let input = "export class Uint8Array {\n}\nexport function copy(b: Uint8Array): Uint8Array;\n";
    let parsed = parse_file(input, &ShimConfig::default());
    assert_eq!(parsed.registry.category_of("Uint8Array"), MarshalCategory::Object);

    let (shims, _) = generate_shims(input, &ShimConfig::default());
    assert!(shims.contains(r#"workerCall("copy", "obj", [b], ["obj"], []);"#));
    assert!(!shims.contains("ArrayBuffer"));
}
