use super::parser::Node;
use indexmap::IndexMap;

#[derive(Default)]
struct Context {
    code: String,
    /// Partial symbol -> partial name, in order of appearance.
    partials: IndexMap<String, String>,
    serial: usize,
}

/// Writes the Hogan.js code object for a parsed template.
pub(crate) fn generate(nodes: &[Node]) -> String {
    let mut context = Context::default();
    walk(nodes, &mut context);

    let partials = context
        .partials
        .iter()
        .map(|(symbol, name)| {
            format!(
                "\"{}\":{{name:\"{}\", partials: {{}}, subs: {{  }}}}",
                escape(symbol),
                escape(name)
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{{code: function (c,p,i) {{ var t=this;t.b(i=i||\"\");{}return t.fl(); }},partials: {{{}}}, subs: {{  }}}}",
        context.code, partials
    )
}

fn walk(nodes: &[Node], context: &mut Context) {
    for node in nodes {
        match node {
            Node::Text(text) => {
                context.code.push_str(&format!("t.b(\"{}\");", escape(text)));
            }
            Node::Newline { last: true } => context.code.push_str("t.b(\"\\n\");"),
            Node::Newline { last: false } => context.code.push_str("t.b(\"\\n\" + i);"),
            Node::Variable { name, escaped } => {
                let method = if *escaped { "v" } else { "t" };
                context.code.push_str(&format!(
                    "t.b(t.{method}(t.{}(\"{}\",c,p,0)));",
                    lookup_method(name),
                    escape(name)
                ));
            }
            Node::Partial { name, indent } => {
                let symbol = format!("<{name}{}", context.serial);
                context.serial += 1;
                context.code.push_str(&format!(
                    "t.b(t.rp(\"{}\",c,p,\"{}\"));",
                    escape(&symbol),
                    escape(indent)
                ));
                context.partials.insert(symbol, name.clone());
            }
            Node::Section { name, inverted: false, nodes, start, end, delimiters } => {
                context.code.push_str(&format!(
                    "if(t.s(t.{}(\"{}\",c,p,1),c,p,0,{start},{end},\"{}\")){{t.rs(c,p,function(c,p,t){{",
                    lookup_method(name),
                    escape(name),
                    escape(delimiters)
                ));
                walk(nodes, context);
                context.code.push_str("});c.pop();}");
            }
            Node::Section { name, inverted: true, nodes, .. } => {
                context.code.push_str(&format!(
                    "if(!t.s(t.{}(\"{}\",c,p,1),c,p,1,0,0,\"\")){{",
                    lookup_method(name),
                    escape(name)
                ));
                walk(nodes, context);
                context.code.push_str("};");
            }
        }
    }
}

/// Dotted names are resolved through the context stack with `d`, plain names with `f`.
fn lookup_method(name: &str) -> &'static str {
    if name.contains('.') {
        "d"
    } else {
        "f"
    }
}

/// Escapes `text` for a double quoted JavaScript string literal.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    escaped
}
