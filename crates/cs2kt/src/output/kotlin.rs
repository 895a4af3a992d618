//! Kotlin declaration writer.
//!
//! Walks a [`CompilationUnit`] and emits a Kotlin skeleton: package,
//! type headers, fields, properties and method signatures. Method bodies
//! are copied from the tree as already-translated lines.
//!
//! Array type syntax is written in constructor form (`arrayOf<T>`) in every
//! position, including field, parameter and return types.

use crate::driver::{TranslationContext, TranslationDriver};
use crate::naming::{field_is_read_only, kotlin_package_name, to_camel_case};
use crate::traits::{TranslateError, Walker};
use cs2kt_frontend::{
    CompilationUnit, DeclKind, FieldDecl, MemberDecl, MemberId, MethodDecl, PropertyDecl,
    SemanticModel, TypeDecl, TypeDeclKind, TypeSyntax,
};

/// Emits a [`CompilationUnit`] as Kotlin source.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinWriter;

impl KotlinWriter {
    pub fn new() -> Self {
        Self
    }

    /// Translate a unit with the built-in tables.
    pub fn emit<M: SemanticModel + ?Sized>(
        model: &M,
        unit: &CompilationUnit,
    ) -> Result<String, TranslateError> {
        TranslationDriver::new(model).run(&mut Self, unit)
    }
}

impl<M: SemanticModel + ?Sized> Walker<M> for KotlinWriter {
    type Root = CompilationUnit;

    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn walk(
        &mut self,
        unit: &CompilationUnit,
        cx: &mut TranslationContext<'_, M>,
    ) -> Result<(), TranslateError> {
        if let Some(namespace) = &unit.namespace {
            cx.emitter
                .indented_write_line(&format!("package {}", kotlin_package_name(namespace)));
            cx.emitter.newline();
            cx.enter_scope(namespace.clone());
        }

        for (i, decl) in unit.types.iter().enumerate() {
            if i > 0 {
                cx.emitter.newline();
            }
            write_type(decl, cx)?;
        }

        if unit.namespace.is_some() {
            cx.exit_scope();
        }
        Ok(())
    }
}

fn write_type<M: SemanticModel + ?Sized>(
    decl: &TypeDecl,
    cx: &mut TranslationContext<'_, M>,
) -> Result<(), TranslateError> {
    if decl.name.is_empty() {
        return Err(TranslateError::malformed("type declaration", "missing name"));
    }
    cx.enter_scope(decl.name.clone());

    match decl.kind {
        TypeDeclKind::Enum => write_enum(decl, cx)?,
        TypeDeclKind::Class | TypeDeclKind::Struct | TypeDeclKind::Interface => {
            let keyword = if decl.kind == TypeDeclKind::Interface {
                "interface"
            } else {
                "class"
            };
            for base in &decl.bases {
                check_type(base, &format!("base list of {}", decl.name))?;
            }
            let bases = base_list(decl, cx);
            cx.emitter.indented_write(&format!("{keyword} {}", decl.name));
            if !bases.is_empty() {
                cx.emitter.write(&format!(" : {}", bases.join(", ")));
            }
            cx.emitter.write(" {");
            cx.emitter.newline();

            cx.emitter.push_indent();
            let in_interface = decl.kind == TypeDeclKind::Interface;
            for (i, member) in decl.members.iter().enumerate() {
                match member {
                    MemberDecl::Field(field) => write_field(field, cx)?,
                    MemberDecl::Property(property) => write_property(property, in_interface, cx)?,
                    MemberDecl::Method(method) => {
                        if i > 0 && !in_interface {
                            cx.emitter.newline();
                        }
                        write_method(method, in_interface, cx)?;
                    }
                }
            }
            cx.emitter.pop_indent();
            cx.emitter.indented_write_line("}");
        }
    }

    cx.exit_scope();
    Ok(())
}

/// Base list entries. Base classes get a constructor call; interfaces and
/// anything that does not resolve are written as plain types.
fn base_list<M: SemanticModel + ?Sized>(
    decl: &TypeDecl,
    cx: &mut TranslationContext<'_, M>,
) -> Vec<String> {
    decl.bases
        .iter()
        .map(|base| {
            let text = cx.translate_syntax(base);
            let is_class = cx
                .resolve(base)
                .is_some_and(|ty| ty.decl_kind() == Some(DeclKind::Class));
            if is_class && decl.kind != TypeDeclKind::Interface {
                format!("{text}()")
            } else {
                text
            }
        })
        .collect()
}

/// Reject type references with an empty name anywhere inside them.
fn check_type(syntax: &TypeSyntax, context: &str) -> Result<(), TranslateError> {
    match syntax {
        TypeSyntax::Array(element) => check_type(element, context),
        TypeSyntax::Named { name, args } => {
            if name.is_empty() {
                return Err(TranslateError::malformed(context, "empty type name"));
            }
            args.iter().try_for_each(|arg| check_type(arg, context))
        }
    }
}

fn write_enum<M: SemanticModel + ?Sized>(
    decl: &TypeDecl,
    cx: &mut TranslationContext<'_, M>,
) -> Result<(), TranslateError> {
    if decl.enum_members.iter().any(String::is_empty) {
        return Err(TranslateError::malformed(
            format!("enum {}", decl.name),
            "empty member name",
        ));
    }
    cx.emitter
        .indented_write_line(&format!("enum class {} {{", decl.name));
    cx.emitter.push_indent();
    let last = decl.enum_members.len().saturating_sub(1);
    for (i, member) in decl.enum_members.iter().enumerate() {
        cx.emitter.indented_write(member);
        if i < last {
            cx.emitter.write(",");
        }
        cx.emitter.newline();
    }
    cx.emitter.pop_indent();
    cx.emitter.indented_write_line("}");
    Ok(())
}

fn write_field<M: SemanticModel + ?Sized>(
    field: &FieldDecl,
    cx: &mut TranslationContext<'_, M>,
) -> Result<(), TranslateError> {
    if field.name.is_empty() {
        return Err(TranslateError::malformed("field declaration", "missing name"));
    }
    check_type(&field.ty, &format!("field {}", field.name))?;
    let binding = if field_is_read_only(&field.modifiers) {
        "val"
    } else {
        "var"
    };
    let ty = cx.translate_syntax(&field.ty);
    let init = field
        .initializer
        .clone()
        .or_else(|| cx.default_value_of_syntax(&field.ty));

    cx.emitter.indent();
    cx.emitter
        .write(&format!("{binding} {} : {ty}", to_camel_case(&field.name)));
    if let Some(init) = init {
        cx.emitter.write(&format!(" = {init}"));
    }
    cx.emitter.newline();
    Ok(())
}

fn write_property<M: SemanticModel + ?Sized>(
    property: &PropertyDecl,
    in_interface: bool,
    cx: &mut TranslationContext<'_, M>,
) -> Result<(), TranslateError> {
    if property.name.is_empty() {
        return Err(TranslateError::malformed("property declaration", "missing name"));
    }
    check_type(&property.ty, &format!("property {}", property.name))?;
    let ty = cx.translate_syntax(&property.ty);

    if in_interface {
        cx.emitter
            .indented_write_line(&format!("val {} : {ty}", property.name));
        return Ok(());
    }

    let modifier = override_modifier(property.symbol, cx)?;
    cx.emitter.indent();
    cx.emitter
        .write(&format!("{modifier}var {} : {ty}", property.name));
    if let Some(default) = cx.default_value_of_syntax(&property.ty) {
        cx.emitter.write(&format!(" = {default}"));
    }
    cx.emitter.newline();
    Ok(())
}

fn write_method<M: SemanticModel + ?Sized>(
    method: &MethodDecl,
    in_interface: bool,
    cx: &mut TranslationContext<'_, M>,
) -> Result<(), TranslateError> {
    if method.name.is_empty() {
        return Err(TranslateError::malformed("method declaration", "missing name"));
    }
    if let Some(param) = method.params.iter().find(|p| p.identifier.is_empty()) {
        let ty = param.ty.as_ref().map(TypeSyntax::to_string);
        return Err(TranslateError::malformed(
            format!("parameter list of {}", method.name),
            format!("parameter without identifier ({})", ty.as_deref().unwrap_or("untyped")),
        ));
    }

    let context = format!("method {}", method.name);
    check_type(&method.return_type, &context)?;
    for ty in method.params.iter().filter_map(|p| p.ty.as_ref()) {
        check_type(ty, &context)?;
    }

    cx.enter_scope(method.name.clone());
    let modifier = if in_interface {
        ""
    } else {
        override_modifier(method.symbol, cx)?
    };
    let params = cx.format_parameters(&method.params);
    let ret = cx.translate_syntax(&method.return_type);
    cx.exit_scope();

    let mut signature = format!("{modifier}fun {}({params})", method.name);
    if ret != "Unit" {
        signature.push_str(&format!(" : {ret}"));
    }

    if in_interface {
        cx.emitter.indented_write_line(&signature);
        return Ok(());
    }

    cx.emitter.indented_write_line(&format!("{signature} {{"));
    cx.emitter.push_indent();
    for line in &method.body {
        cx.emitter.indented_write_line(line);
    }
    cx.emitter.pop_indent();
    cx.emitter.indented_write_line("}");
    Ok(())
}

fn override_modifier<M: SemanticModel + ?Sized>(
    symbol: Option<MemberId>,
    cx: &TranslationContext<'_, M>,
) -> Result<&'static str, TranslateError> {
    let Some(id) = symbol else {
        return Ok("");
    };
    if cx.model().member(id).is_none() {
        return Err(TranslateError::UnknownMember(id));
    }
    Ok(if cx.is_interface_implementation(id) {
        "override "
    } else {
        ""
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs2kt_frontend::{MemberKind, Parameter, SymbolGraph};

    fn unit(types: Vec<TypeDecl>) -> CompilationUnit {
        CompilationUnit {
            namespace: None,
            types,
        }
    }

    #[test]
    fn test_enum() {
        let graph = SymbolGraph::with_core_library();
        let decl = TypeDecl::new("Color", TypeDeclKind::Enum)
            .with_enum_members(["Red", "Green", "Blue"]);
        let kt = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap();
        assert_eq!(kt, "enum class Color {\n    Red,\n    Green,\n    Blue\n}\n");
    }

    #[test]
    fn test_fields_use_defaults_and_camel_case() {
        let mut graph = SymbolGraph::with_core_library();
        graph.add_enum("Color", ["Red", "Green"]).unwrap();
        let decl = TypeDecl::new("Settings", TypeDeclKind::Class).with_members(vec![
            MemberDecl::Field(FieldDecl {
                name: "MaxRetries".into(),
                ty: TypeSyntax::named("int"),
                modifiers: vec!["private".into(), "readonly".into()],
                initializer: None,
            }),
            MemberDecl::Field(FieldDecl {
                name: "Color".into(),
                ty: TypeSyntax::named("Color"),
                modifiers: vec![],
                initializer: None,
            }),
            MemberDecl::Field(FieldDecl {
                name: "Timeout".into(),
                ty: TypeSyntax::named("TimeSpan"),
                modifiers: vec!["const".into()],
                initializer: Some("Duration.ofSeconds(5)".into()),
            }),
            MemberDecl::Field(FieldDecl {
                name: "Items".into(),
                ty: TypeSyntax::generic("List", vec![TypeSyntax::named("string")]),
                modifiers: vec![],
                initializer: None,
            }),
        ]);
        let kt = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap();
        assert_eq!(
            kt,
            "class Settings {\n\
             \x20   val maxRetries : Int = 0\n\
             \x20   var color : Color = Color.Red\n\
             \x20   val timeout : Duration = Duration.ofSeconds(5)\n\
             \x20   var items : MutableList<String>\n\
             }\n"
        );
    }

    #[test]
    fn test_override_on_interface_members() {
        let mut graph = SymbolGraph::with_core_library();
        let iface = graph.add_type("IGreeter", DeclKind::Interface).unwrap();
        graph.add_member(iface, "Greet", MemberKind::Method).unwrap();
        let ty = graph.add_type("Greeter", DeclKind::Class).unwrap();
        graph.add_interface(ty, iface).unwrap();
        let greet = graph.add_member(ty, "Greet", MemberKind::Method).unwrap();
        let helper = graph.add_member(ty, "Helper", MemberKind::Method).unwrap();

        let decl = TypeDecl::new("Greeter", TypeDeclKind::Class)
            .with_bases(vec![TypeSyntax::named("IGreeter")])
            .with_symbol(ty)
            .with_members(vec![
                MemberDecl::Method(MethodDecl {
                    name: "Greet".into(),
                    params: vec![Parameter::typed("name", TypeSyntax::named("string"))],
                    return_type: TypeSyntax::named("string"),
                    body: vec!["return \"Hello, $name\"".into()],
                    symbol: Some(greet),
                }),
                MemberDecl::Method(MethodDecl {
                    name: "Helper".into(),
                    params: vec![],
                    return_type: TypeSyntax::named("void"),
                    body: vec![],
                    symbol: Some(helper),
                }),
            ]);
        let kt = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap();
        assert_eq!(
            kt,
            "class Greeter : IGreeter {\n\
             \x20   override fun Greet(name : String) : String {\n\
             \x20       return \"Hello, $name\"\n\
             \x20   }\n\
             \n\
             \x20   fun Helper() {\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_base_class_gets_constructor_call() {
        let mut graph = SymbolGraph::with_core_library();
        graph.add_type("ActorBase", DeclKind::Class).unwrap();
        graph.add_type("IActor", DeclKind::Interface).unwrap();
        let decl = TypeDecl::new("EchoActor", TypeDeclKind::Class).with_bases(vec![
            TypeSyntax::named("ActorBase"),
            TypeSyntax::named("IActor"),
        ]);
        let kt = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap();
        assert_eq!(kt, "class EchoActor : ActorBase(), IActor {\n}\n");
    }

    #[test]
    fn test_interface_declaration() {
        let graph = SymbolGraph::with_core_library();
        let decl = TypeDecl::new("IProcess", TypeDeclKind::Interface).with_members(vec![
            MemberDecl::Property(PropertyDecl {
                name: "Name".into(),
                ty: TypeSyntax::named("string"),
                symbol: None,
            }),
            MemberDecl::Method(MethodDecl {
                name: "Send".into(),
                params: vec![Parameter::typed("message", TypeSyntax::named("object"))],
                return_type: TypeSyntax::named("void"),
                body: vec![],
                symbol: None,
            }),
        ]);
        let kt = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap();
        assert_eq!(
            kt,
            "interface IProcess {\n    val Name : String\n    fun Send(message : Any)\n}\n"
        );
    }

    #[test]
    fn test_array_syntax_uses_constructor_form() {
        let graph = SymbolGraph::with_core_library();
        let decl = TypeDecl::new("Buffer", TypeDeclKind::Class).with_members(vec![
            MemberDecl::Field(FieldDecl {
                name: "Values".into(),
                ty: TypeSyntax::array(TypeSyntax::named("int")),
                modifiers: vec![],
                initializer: None,
            }),
            MemberDecl::Method(MethodDecl {
                name: "Split".into(),
                params: vec![Parameter::typed(
                    "parts",
                    TypeSyntax::array(TypeSyntax::named("string")),
                )],
                return_type: TypeSyntax::array(TypeSyntax::named("int")),
                body: vec![],
                symbol: None,
            }),
        ]);
        let kt = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap();
        assert_eq!(
            kt,
            "class Buffer {\n\
             \x20   var values : arrayOf<Int>\n\
             \n\
             \x20   fun Split(parts : arrayOf<String>) : arrayOf<Int> {\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_missing_parameter_identifier_is_malformed() {
        let graph = SymbolGraph::with_core_library();
        let decl = TypeDecl::new("A", TypeDeclKind::Class).with_members(vec![MemberDecl::Method(
            MethodDecl {
                name: "F".into(),
                params: vec![Parameter::typed("", TypeSyntax::named("int"))],
                return_type: TypeSyntax::named("void"),
                body: vec![],
                symbol: None,
            },
        )]);
        let err = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedInput { .. }));
        assert!(err.to_string().contains("parameter list of F"));
    }

    #[test]
    fn test_empty_type_name_is_malformed() {
        let graph = SymbolGraph::with_core_library();
        let decl = TypeDecl::new("A", TypeDeclKind::Class).with_members(vec![MemberDecl::Field(
            FieldDecl {
                name: "items".into(),
                ty: TypeSyntax::generic("List", vec![TypeSyntax::named("")]),
                modifiers: vec![],
                initializer: None,
            },
        )]);
        let err = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap_err();
        assert_eq!(err.to_string(), "malformed field items: empty type name");
    }

    #[test]
    fn test_unknown_member_symbol() {
        let graph = SymbolGraph::with_core_library();
        let decl = TypeDecl::new("A", TypeDeclKind::Class).with_members(vec![
            MemberDecl::Property(PropertyDecl {
                name: "P".into(),
                ty: TypeSyntax::named("int"),
                symbol: Some(MemberId(42)),
            }),
        ]);
        let err = KotlinWriter::emit(&graph, &unit(vec![decl])).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownMember(MemberId(42))));
    }
}
