use crate::{
    config::ShimConfig,
    registry::TypeRegistry,
    types::{ArgDecl, FunctionSignature, MarshalCategory, MarshaledArgs},
    utils::quote,
};

/// Builds the parallel name/declared/category/transfer lists for a stub.
/// Binary arguments are declared as the transfer type and listed for
/// transfer; everything else keeps its declared type.
pub fn marshal_args(args: &[ArgDecl], registry: &TypeRegistry, config: &ShimConfig) -> MarshaledArgs {
    let mut marshaled = MarshaledArgs::default();

    for arg in args {
        let category = registry.category_of(&arg.type_);
        let type_ = if category == MarshalCategory::Binary {
            marshaled.transfer.push(arg.name.clone());
            config.transfer_type.as_str()
        } else {
            arg.type_.as_str()
        };
        let optional = if arg.optional { "?" } else { "" };

        marshaled.names.push(arg.name.clone());
        marshaled.declared.push(format!("{}{}: {}", arg.name, optional, type_));
        marshaled.categories.push(category);
    }

    marshaled
}

/// `export class Name extends Base {`
pub fn emit_class_header(name: &str, config: &ShimConfig) -> String {
    format!("export class {} extends {} {{", name, config.base_class)
}

/// Emits the forwarding stub for `signature`, or `None` if the operation
/// is in the skip list.
///
/// Free functions call the global dispatch entry point, methods the
/// instance-bound one. A binary result is rewrapped in a byte view once
/// the dispatch promise resolves.
pub fn emit_stub(signature: &FunctionSignature, registry: &TypeRegistry, config: &ShimConfig) -> Option<String> {
    if config.is_skipped(&signature.name) {
        log::debug!("skipping {}: provided by {}", signature.name, config.base_class);
        return None;
    }

    let ret  = registry.classify_return(&signature.return_type);
    let args = marshal_args(&signature.args, registry, config);

    let (prefix, dispatch) = if signature.is_method {
        ("", config.method_dispatch.as_str())
    } else {
        ("export function ", config.global_dispatch.as_str())
    };

    let post = if ret.category == MarshalCategory::Binary {
        format!(".then(ab => new {}(ab))", config.binary_type)
    } else {
        String::new()
    };

    let categories = args
        .categories
        .iter()
        .map(|c| quote(c.tag()))
        .collect::<Vec<_>>();

    let indent = &signature.indent;
    let lines = [
        format!(
            "{}{}{}({}): {} {{",
            indent,
            prefix,
            signature.name,
            args.declared.join(", "),
            ret.declared
        ),
        format!(
            "{}{}return {}({}, {}, [{}], [{}], [{}]){};",
            indent,
            config.indent,
            dispatch,
            quote(&signature.name),
            quote(ret.category.tag()),
            args.names.join(", "),
            categories.join(", "),
            args.transfer.join(", "),
            post
        ),
        format!("{}}}", indent),
    ];

    Some(lines.join("\n"))
}
