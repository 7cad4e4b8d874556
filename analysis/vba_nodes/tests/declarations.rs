//! End-to-end declaration-model tests.
//!
//! Each test builds fragments the way the parser hands them over for a
//! small piece of source, then checks the resulting tree.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use vba_ir::{
    AsTypeClause, ConstStmt, ConstSubStmt, Identifier, LocalKeyword, ModuleFragment, ModuleItem,
    ProcedureItem, ProcedureKind, ProcedureStmt, Scope, Span, TypeHint, TypeName, ValueExpr,
    VariableStmt, VariableSubStmt, VisibilityClause,
};
use vba_nodes::{
    build_module, build_project, build_variable_declaration, Accessibility, BuildConfig,
    BuildError, Node, VariableNode,
};

/// Tracks byte offsets while fragments for one line of source are assembled.
struct Line {
    offset: u32,
}

impl Line {
    fn new(offset: u32) -> Self {
        Line { offset }
    }

    fn span(&mut self, text: &str) -> Span {
        let start = self.offset;
        self.offset += u32::try_from(text.len()).unwrap() + 1;
        Span::new(start, start + u32::try_from(text.len()).unwrap())
    }

    fn ident(&mut self, text: &str) -> Identifier {
        Identifier::new(self.span(text), text)
    }

    fn hint(&mut self, sigil: &str) -> TypeHint {
        TypeHint::new(self.span(sigil), sigil)
    }

    fn as_type(&mut self, type_name: &str) -> AsTypeClause {
        let start = self.span("As");
        let name = TypeName::new(self.span(type_name), type_name);
        AsTypeClause::new(Span::new(start.start, name.span.end), name)
    }
}

fn vars(node: &Node) -> Vec<&VariableNode> {
    node.children()
        .iter()
        .map(|child| child.as_variable().expect("variable child"))
        .collect()
}

#[test]
fn private_statement_at_module_scope() {
    // Private x As Integer, y$, z
    let mut line = Line::new(0);
    let visibility = VisibilityClause::new(line.span("Private"), "Private");
    let x = VariableSubStmt::new(Span::new(8, 20), line.ident("x")).with_as_type(line.as_type("Integer"));
    let y = VariableSubStmt::new(Span::new(22, 24), line.ident("y")).with_type_hint(line.hint("$"));
    let z = VariableSubStmt::new(Span::new(26, 27), line.ident("z"));
    let stmt = VariableStmt::with_visibility(Span::new(0, 27), visibility, vec![x, y, z]);

    let node = build_variable_declaration(&stmt, &Scope::module("Module1"), &BuildConfig::default())
        .unwrap();
    let vars = vars(&node);

    assert_eq!(node.children().len(), 3);
    assert_eq!(
        vars[0],
        &VariableNode {
            name: "x".to_string(),
            type_name: "Integer".to_string(),
            is_implicitly_typed: false,
            is_using_type_hint: false,
            accessibility: Accessibility::Private,
            is_array: false,
            is_new: false,
        }
    );
    assert_eq!(
        vars[1],
        &VariableNode {
            name: "y".to_string(),
            type_name: "String".to_string(),
            is_implicitly_typed: false,
            is_using_type_hint: true,
            accessibility: Accessibility::Private,
            is_array: false,
            is_new: false,
        }
    );
    assert_eq!(
        vars[2],
        &VariableNode {
            name: "z".to_string(),
            type_name: "Variant".to_string(),
            is_implicitly_typed: true,
            is_using_type_hint: false,
            accessibility: Accessibility::Private,
            is_array: false,
            is_new: false,
        }
    );
    assert_eq!(node.children()[1].source(), Span::new(22, 24));
}

#[test]
fn local_dim_inside_procedure() {
    // Sub DoWork()
    //     Dim count As Long
    // End Sub
    let mut line = Line::new(17);
    let count = VariableSubStmt::new(Span::new(21, 34), line.ident("count"))
        .with_as_type(line.as_type("Long"));
    let body = vec![ProcedureItem::Variable(VariableStmt::local(
        Span::new(17, 34),
        LocalKeyword::Dim,
        vec![count],
    ))];
    let proc = ProcedureStmt::new(
        Span::new(0, 42),
        ProcedureKind::Sub,
        Identifier::new(Span::new(4, 10), "DoWork"),
    )
    .with_body(body);
    let module = ModuleFragment::new("Module1", Span::new(0, 42), vec![ModuleItem::Procedure(proc)]);

    let root = build_module(&module, &BuildConfig::default()).unwrap();
    let proc = &root.children()[0];
    let decl = &proc.children()[0];
    let vars = vars(decl);

    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].name, "count");
    assert_eq!(vars[0].type_name, "Long");
    assert_eq!(vars[0].accessibility, Accessibility::Private);
    assert_eq!(decl.children()[0].scope().to_string(), "Module1.DoWork");
    assert_eq!(proc.scope().to_string(), "Module1");
}

#[test]
fn dim_order_preserved() {
    // Dim a, b$, c As String
    let mut line = Line::new(4);
    let a = VariableSubStmt::new(Span::new(4, 5), line.ident("a"));
    let b = VariableSubStmt::new(Span::new(7, 9), line.ident("b")).with_type_hint(line.hint("$"));
    let c = VariableSubStmt::new(Span::new(11, 22), line.ident("c"))
        .with_as_type(line.as_type("String"));
    let stmt = VariableStmt::local(Span::new(0, 22), LocalKeyword::Dim, vec![a, b, c]);

    let node = build_variable_declaration(
        &stmt,
        &Scope::procedure("Module1", "Main"),
        &BuildConfig::default(),
    )
    .unwrap();
    let names: Vec<_> = node.children().iter().filter_map(Node::name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn class_module_with_members() {
    // Private mItems As New Collection
    // Public Const VERSION$ = "1.0"
    // Public Property Get Count() As Long
    //     Dim n&
    // End Property
    let mut line = Line::new(0);
    let items = VariableSubStmt::new(Span::new(8, 32), line.ident("mItems"))
        .with_as_type(line.as_type("Collection").with_new());
    let version = ConstSubStmt::new(
        Span::new(46, 62),
        Identifier::new(Span::new(46, 53), "VERSION"),
        ValueExpr::new(Span::new(57, 62), "\"1.0\""),
    )
    .with_type_hint(TypeHint::new(Span::new(53, 54), "$"));
    let n = VariableSubStmt::new(Span::new(107, 109), Identifier::new(Span::new(107, 108), "n"))
        .with_type_hint(TypeHint::new(Span::new(108, 109), "&"));
    let count = ProcedureStmt::new(
        Span::new(63, 122),
        ProcedureKind::PropertyGet,
        Identifier::new(Span::new(83, 88), "Count"),
    )
    .with_visibility(VisibilityClause::new(Span::new(63, 69), "Public"))
    .with_as_type(AsTypeClause::new(
        Span::new(91, 98),
        TypeName::new(Span::new(94, 98), "Long"),
    ))
    .with_body(vec![ProcedureItem::Variable(VariableStmt::local(
        Span::new(103, 109),
        LocalKeyword::Dim,
        vec![n],
    ))]);

    let module = ModuleFragment::new(
        "Counter",
        Span::new(0, 122),
        vec![
            ModuleItem::Variable(VariableStmt::with_visibility(
                Span::new(0, 32),
                VisibilityClause::new(Span::new(0, 7), "Private"),
                vec![items],
            )),
            ModuleItem::Constant(
                ConstStmt::new(Span::new(33, 62), vec![version])
                    .with_visibility(VisibilityClause::new(Span::new(33, 39), "Public")),
            ),
            ModuleItem::Procedure(count),
        ],
    );

    let root = build_module(&module, &BuildConfig::default()).unwrap();
    let summary: Vec<_> = root
        .descendants()
        .filter_map(|node| {
            let name = node.name()?;
            Some(format!("{} {}", node.scope(), name))
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            "Counter mItems",
            "Counter VERSION",
            "Counter Count",
            "Counter.Count n",
        ]
    );

    let items = root.children()[0].children()[0].as_variable().unwrap();
    assert!(items.is_new);
    assert_eq!(items.type_name, "Collection");
    assert_eq!(items.accessibility, Accessibility::Private);

    let version = root.children()[1].children()[0].as_constant().unwrap();
    assert_eq!(version.type_name, "String");
    assert_eq!(version.accessibility, Accessibility::Public);

    let count = root.children()[2].as_procedure().unwrap();
    assert_eq!(count.return_type.as_ref().unwrap().name, "Long");
    assert_eq!(count.accessibility, Accessibility::Public);
}

#[test]
fn project_excludes_only_the_broken_module() {
    let good = ModuleFragment::new(
        "Good",
        Span::new(0, 10),
        vec![ModuleItem::Variable(VariableStmt::local(
            Span::new(0, 10),
            LocalKeyword::Dim,
            vec![VariableSubStmt::new(
                Span::new(4, 5),
                Identifier::new(Span::new(4, 5), "a"),
            )],
        ))],
    );
    let bad = ModuleFragment::new(
        "Bad",
        Span::new(0, 10),
        vec![ModuleItem::Variable(VariableStmt::local(
            Span::new(0, 10),
            LocalKeyword::Dim,
            vec![VariableSubStmt {
                span: Span::new(4, 6),
                identifier: Some(Identifier::new(Span::new(4, 5), "b")),
                subscripts: None,
                type_hint: Some(TypeHint::new(Span::new(5, 6), "^")),
                as_type: None,
            }],
        ))],
    );

    let model = build_project(&[good.clone(), bad, good], &BuildConfig::default());
    assert_eq!(model.modules.len(), 2);
    assert_eq!(model.failures.len(), 1);
    assert_eq!(model.failures[0].module, "Bad");
    assert_eq!(
        model.failures[0].error,
        BuildError::UnmappedTypeHint {
            hint: "^".to_string(),
            span: Span::new(5, 6),
        }
    );
    assert_eq!(
        model.failures[0].diagnostic().to_string(),
        "error[E0002]: unknown type hint `^` at 5..6"
    );
}
