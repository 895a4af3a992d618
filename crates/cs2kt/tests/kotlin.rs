//! End-to-end tests for the Kotlin writer.
//!
//! Run `cargo insta review` to update snapshots after intentional changes.

use cs2kt::{
    CompilationUnit, DeclKind, DiagnosticKind, ERROR_TYPE, KotlinWriter, MemberKind, Parameter,
    SymbolGraph, TranslationDriver, TypeDecl, TypeSyntax, UNKNOWN_TYPE,
};
use cs2kt_frontend::{FieldDecl, MemberDecl, MethodDecl, PropertyDecl, TypeDeclKind};

fn field(name: &str, ty: TypeSyntax, modifiers: &[&str]) -> MemberDecl {
    MemberDecl::Field(FieldDecl {
        name: name.to_string(),
        ty,
        modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
        initializer: None,
    })
}

fn method(
    name: &str,
    params: Vec<Parameter>,
    return_type: &str,
    body: &[&str],
    symbol: Option<cs2kt::MemberId>,
) -> MemberDecl {
    MemberDecl::Method(MethodDecl {
        name: name.to_string(),
        params,
        return_type: TypeSyntax::named(return_type),
        body: body.iter().map(|l| l.to_string()).collect(),
        symbol,
    })
}

/// An actor runtime fragment: an enum, a plain class, an interface and a
/// class implementing it, with one erroneous and one unknown reference.
fn actor_runtime() -> (SymbolGraph, CompilationUnit) {
    let mut graph = SymbolGraph::with_core_library();
    graph.add_type("PID", DeclKind::Class).unwrap();
    graph
        .add_enum("ProcessState", ["Running", "Stopped"])
        .unwrap();
    graph.mark_error("Mailbox");

    let stats = graph.add_type("RestartStatistics", DeclKind::Class).unwrap();
    let failure_count = graph
        .add_member(stats, "FailureCount", MemberKind::Property)
        .unwrap();
    let fail = graph.add_member(stats, "Fail", MemberKind::Method).unwrap();
    let within = graph
        .add_member(stats, "IsWithinDuration", MemberKind::Method)
        .unwrap();

    let iprocess = graph.add_type("IProcess", DeclKind::Interface).unwrap();
    graph
        .add_member(iprocess, "SendUserMessage", MemberKind::Method)
        .unwrap();
    graph.add_member(iprocess, "Stop", MemberKind::Method).unwrap();

    let local = graph.add_type("LocalProcess", DeclKind::Class).unwrap();
    graph.add_interface(local, iprocess).unwrap();
    let send = graph
        .add_member(local, "SendUserMessage", MemberKind::Method)
        .unwrap();
    let stop = graph.add_member(local, "Stop", MemberKind::Method).unwrap();

    let pid = || TypeSyntax::named("PID");
    let unit = CompilationUnit {
        namespace: Some("Proto".to_string()),
        types: vec![
            TypeDecl::new("ProcessState", TypeDeclKind::Enum)
                .with_enum_members(["Running", "Stopped"]),
            TypeDecl::new("RestartStatistics", TypeDeclKind::Class)
                .with_symbol(stats)
                .with_members(vec![
                    MemberDecl::Property(PropertyDecl {
                        name: "FailureCount".to_string(),
                        ty: TypeSyntax::named("int"),
                        symbol: Some(failure_count),
                    }),
                    field("LastFailureTime", TypeSyntax::named("DateTime"), &[]),
                    field("State", TypeSyntax::named("ProcessState"), &[]),
                    method(
                        "Fail",
                        vec![],
                        "void",
                        &["FailureCount++", "lastFailureTime = DateTime.now()"],
                        Some(fail),
                    ),
                    method(
                        "IsWithinDuration",
                        vec![Parameter::typed("within", TypeSyntax::named("TimeSpan"))],
                        "bool",
                        &["return lastFailureTime > DateTime.now() - within"],
                        Some(within),
                    ),
                ]),
            TypeDecl::new("IProcess", TypeDeclKind::Interface)
                .with_symbol(iprocess)
                .with_members(vec![
                    method(
                        "SendUserMessage",
                        vec![
                            Parameter::typed("pid", pid()),
                            Parameter::typed("message", TypeSyntax::named("object")),
                        ],
                        "void",
                        &[],
                        None,
                    ),
                    method("Stop", vec![Parameter::typed("pid", pid())], "void", &[], None),
                ]),
            TypeDecl::new("LocalProcess", TypeDeclKind::Class)
                .with_symbol(local)
                .with_bases(vec![TypeSyntax::named("IProcess")])
                .with_members(vec![
                    field("Mailbox", TypeSyntax::named("Mailbox"), &["private", "readonly"]),
                    field("Props", TypeSyntax::named("Props"), &[]),
                    field(
                        "Filter",
                        TypeSyntax::generic("Func", vec![pid(), TypeSyntax::named("bool")]),
                        &[],
                    ),
                    method(
                        "SendUserMessage",
                        vec![
                            Parameter::typed("pid", pid()),
                            Parameter::typed("message", TypeSyntax::named("object")),
                        ],
                        "void",
                        &["mailbox.postUserMessage(message)"],
                        Some(send),
                    ),
                    method(
                        "Stop",
                        vec![Parameter::typed("pid", pid())],
                        "void",
                        &["mailbox.stop()"],
                        Some(stop),
                    ),
                ]),
        ],
    };
    (graph, unit)
}

#[test]
fn actor_runtime_translation() {
    let (graph, unit) = actor_runtime();
    let kotlin = KotlinWriter::emit(&graph, &unit).expect("translation failed");
    insta::assert_snapshot!(kotlin, @r###"
    package proto

    enum class ProcessState {
        Running,
        Stopped
    }

    class RestartStatistics {
        var FailureCount : Int = 0
        var lastFailureTime : DateTime = DateTime()
        var state : ProcessState = ProcessState.Running

        fun Fail() {
            FailureCount++
            lastFailureTime = DateTime.now()
        }

        fun IsWithinDuration(within : Duration) : Boolean {
            return lastFailureTime > DateTime.now() - within
        }
    }

    interface IProcess {
        fun SendUserMessage(pid : PID, message : Any)
        fun Stop(pid : PID)
    }

    class LocalProcess : IProcess {
        val mailbox : **error type**
        var props : **unknown type**
        var filter : (PID) -> Boolean

        override fun SendUserMessage(pid : PID, message : Any) {
            mailbox.postUserMessage(message)
        }

        override fun Stop(pid : PID) {
            mailbox.stop()
        }
    }
    "###);
}

#[test]
fn sentinels_are_reported_with_scope() {
    let (graph, unit) = actor_runtime();
    let translation = TranslationDriver::new(&graph)
        .run_with_diagnostics(&mut KotlinWriter, &unit)
        .expect("translation failed");

    assert_eq!(translation.output.matches(ERROR_TYPE).count(), 1);
    assert_eq!(translation.output.matches(UNKNOWN_TYPE).count(), 1);

    let found: Vec<_> = translation
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.reference.as_str(), d.scope.as_deref()))
        .collect();
    assert_eq!(
        found,
        vec![
            (
                DiagnosticKind::ErrorType,
                "Mailbox",
                Some("Proto.LocalProcess")
            ),
            (
                DiagnosticKind::UnmappedType,
                "Props",
                Some("Proto.LocalProcess")
            ),
        ]
    );
    assert_eq!(
        translation.diagnostics[0].to_string(),
        "error type `Mailbox` in Proto.LocalProcess"
    );
}

#[test]
fn clean_translation_has_no_sentinels() {
    let (graph, mut unit) = actor_runtime();
    unit.types.truncate(3);
    let translation = TranslationDriver::new(&graph)
        .run_with_diagnostics(&mut KotlinWriter, &unit)
        .expect("translation failed");
    assert!(translation.diagnostics.is_empty());
    assert!(!translation.output.contains("**"));
}

#[test]
fn repeated_runs_are_identical() {
    let (graph, unit) = actor_runtime();
    let first = KotlinWriter::emit(&graph, &unit).unwrap();
    let second = KotlinWriter::emit(&graph, &unit).unwrap();
    assert_eq!(first, second);
}
