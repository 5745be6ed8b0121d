use crate::{
    types::{ArgDecl, Declaration, DeclarationKind, FunctionSignature},
    utils::leading_whitespace,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMENT:        Regex = Regex::new(r"^\s*(//|/\*|\*)").unwrap();
    static ref CLASS_HEADER:   Regex = Regex::new(r"export class ([A-Za-z_$][\w$]*)[^{]*\{").unwrap();
    static ref FREE_FUNCTION:  Regex = Regex::new(r"export function ([^\s(]+)\((.*)\): (.+);").unwrap();
    static ref CONSTRUCTOR:    Regex = Regex::new(r"constructor\(\);").unwrap();
    static ref METHOD:         Regex = Regex::new(r"([^\s(]+)\((.*)\): (.+);").unwrap();
    static ref ARGUMENT:       Regex = Regex::new(r"^\s*([A-Za-z_$][\w$]*)(\?)?: (.+?)\s*$").unwrap();
}

/// A grammar rule gets the raw line and claims it by returning a node.
pub type Rule = fn(&str) -> Option<DeclarationKind>;

/// Line grammar, tried in order. The method rule also matches free
/// functions, so it must come after them; the last rule accepts anything.
pub const GRAMMAR: [(&str, Rule); 6] = [
    ("comment",       comment_rule),
    ("class_header",  class_header_rule),
    ("free_function", free_function_rule),
    ("constructor",   constructor_rule),
    ("method",        method_rule),
    ("passthrough",   passthrough_rule),
];

fn comment_rule(text: &str) -> Option<DeclarationKind> {
    COMMENT.is_match(text).then_some(DeclarationKind::Comment)
}

fn class_header_rule(text: &str) -> Option<DeclarationKind> {
    let caps = CLASS_HEADER.captures(text)?;
    Some(DeclarationKind::ClassHeader { name: caps[1].to_string() })
}

fn free_function_rule(text: &str) -> Option<DeclarationKind> {
    let caps = FREE_FUNCTION.captures(text)?;
    Some(
        parse_signature(text, &caps[1], &caps[2], &caps[3], false)
            .map_or(DeclarationKind::Passthrough, DeclarationKind::Function),
    )
}

fn constructor_rule(text: &str) -> Option<DeclarationKind> {
    CONSTRUCTOR.is_match(text).then_some(DeclarationKind::Constructor)
}

fn method_rule(text: &str) -> Option<DeclarationKind> {
    let caps = METHOD.captures(text)?;
    Some(
        parse_signature(text, &caps[1], &caps[2], &caps[3], true)
            .map_or(DeclarationKind::Passthrough, DeclarationKind::Method),
    )
}

fn passthrough_rule(_text: &str) -> Option<DeclarationKind> {
    Some(DeclarationKind::Passthrough)
}

/// Returns `None` when the argument list is malformed; the caller then
/// treats the line as passthrough.
fn parse_signature(
    text:        &str,
    name:        &str,
    args:        &str,
    return_type: &str,
    is_method:   bool,
) -> Option<FunctionSignature> {
    let Some(args) = parse_args(args) else {
        log::debug!("malformed argument list, passing through: {}", text.trim());
        return None;
    };
    Some(FunctionSignature {
        name:        name.to_string(),
        args,
        return_type: return_type.trim().to_string(),
        is_method,
        indent:      leading_whitespace(text).to_string(),
    })
}

/// Parses `name: type` pairs joined by `", "`. An empty list is zero
/// arguments.
pub fn parse_args(args: &str) -> Option<Vec<ArgDecl>> {
    if args.trim().is_empty() {
        return Some(Vec::new());
    }
    args.split(", ")
        .map(|arg| {
            let caps = ARGUMENT.captures(arg)?;
            Some(ArgDecl {
                name:     caps[1].to_string(),
                type_:    caps[3].to_string(),
                optional: caps.get(2).is_some(),
            })
        })
        .collect()
}

/// Classifies one line with the first grammar rule that claims it.
pub fn parse_line(line: usize, text: &str) -> Declaration {
    let kind = GRAMMAR
        .iter()
        .find_map(|(_, rule)| rule(text))
        .unwrap_or(DeclarationKind::Passthrough);
    Declaration {
        line,
        text: text.to_string(),
        kind,
    }
}

/// Stage one: every input line becomes exactly one node, in order.
pub fn parse_declarations(text: &str) -> Vec<Declaration> {
    text.lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}
