//! Integration test: the built-in rule set end-to-end through the linter.
//!
//! The main fixture mirrors the classic demo input: a function without a
//! return type, an annotated one, an explicitly-`any` badly-named
//! variable, and a string-typed `objectType`.

use typelint_rules::{minimal_rules, recommended_rules, Severity};

use typelint_core::{DeclaredTypeResolver, Linter, SourceUnit, SyntaxKind, SyntaxNode};

/// ```text
/// function test() {              line 1
///   return;
/// }
///
/// function test2(): number {     line 5
///   return;
/// }
///
/// let TestVaRiaBlE: any;         line 9, name at column 5
///
/// const objectType: string = 'User';   line 11, name at column 7
/// ```
fn demo_unit() -> SourceUnit {
    let text = "function test() {\n  return;\n}\n\nfunction test2(): number {\n  return;\n}\n\nlet TestVaRiaBlE: any;\n\nconst objectType: string = 'User';\n";
    let root = SyntaxNode::new(SyntaxKind::SourceFile, 0)
        .with_child(
            SyntaxNode::new(SyntaxKind::FunctionDeclaration, 0)
                .with_name("test")
                .with_child(
                    SyntaxNode::new(SyntaxKind::Block, 16)
                        .with_child(SyntaxNode::new(SyntaxKind::ReturnStatement, 20)),
                ),
        )
        .with_child(
            SyntaxNode::new(SyntaxKind::FunctionDeclaration, 31)
                .with_name("test2")
                .with_declared_type("number")
                .with_child(
                    SyntaxNode::new(SyntaxKind::Block, 56)
                        .with_child(SyntaxNode::new(SyntaxKind::ReturnStatement, 60)),
                ),
        )
        .with_child(
            SyntaxNode::new(SyntaxKind::VariableDeclaration, 75)
                .with_name("TestVaRiaBlE")
                .with_declared_type("any"),
        )
        .with_child(
            SyntaxNode::new(SyntaxKind::VariableDeclaration, 101)
                .with_name("objectType")
                .with_declared_type("string"),
        );
    SourceUnit::new("input.ts", text, root)
}

#[test]
fn demo_input_yields_the_four_classic_diagnostics() {
    let linter = Linter::builder().rules(recommended_rules()).build();
    let result = linter
        .run(&demo_unit(), &DeclaredTypeResolver::new())
        .expect("run should succeed");

    let summary: Vec<(String, usize, usize)> = result
        .diagnostics
        .iter()
        .map(|d| (d.code.clone(), d.location.line, d.location.column))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("TL001".to_string(), 1, 1),  // test() lacks a return type
            ("TL002".to_string(), 9, 5),  // TestVaRiaBlE: any
            ("TL003".to_string(), 9, 5),  // TestVaRiaBlE not camelCase
            ("TL004".to_string(), 11, 7), // objectType: string
        ]
    );
    assert_eq!(result.recovered_errors, 0);

    // test2 declares `number` and must stay silent.
    assert!(!result
        .diagnostics
        .iter()
        .any(|d| d.location.line == 5));
}

#[test]
fn demo_diagnostic_rendering() {
    let linter = Linter::builder().rules(recommended_rules()).build();
    let result = linter
        .run(&demo_unit(), &DeclaredTypeResolver::new())
        .expect("run should succeed");

    insta::assert_snapshot!(
        result.diagnostics[0].to_string(),
        @"input.ts:1:1: error [TL001] A function must declare an explicit return type"
    );
    insta::assert_snapshot!(
        result.diagnostics[2].to_string(),
        @"input.ts:9:5: warning [TL003] Variables must be named in camelCase. TestVaRiaBlE is invalid."
    );
}

#[test]
fn enum_typed_type_variable_is_clean() {
    // enum ObjectType { User, File, Folder }
    // const objectType: ObjectType = ObjectType.User;
    let text = "enum ObjectType {\n    User,\n    File,\n    Folder\n}\n\nconst objectType: ObjectType = ObjectType.User;\n";
    let root = SyntaxNode::new(SyntaxKind::SourceFile, 0)
        .with_child(
            SyntaxNode::new(SyntaxKind::EnumDeclaration, 0)
                .with_name("ObjectType")
                .with_children([
                    SyntaxNode::new(SyntaxKind::EnumMember, 22).with_name("User"),
                    SyntaxNode::new(SyntaxKind::EnumMember, 32).with_name("File"),
                    SyntaxNode::new(SyntaxKind::EnumMember, 42).with_name("Folder"),
                ]),
        )
        .with_child(
            SyntaxNode::new(SyntaxKind::VariableDeclaration, 58)
                .with_name("objectType")
                .with_declared_type("ObjectType"),
        );
    let unit = SourceUnit::new("enums.ts", text, root);

    let linter = Linter::builder().rules(recommended_rules()).build();
    let result = linter
        .run(&unit, &DeclaredTypeResolver::new())
        .expect("run should succeed");

    assert!(result.is_clean(), "got: {:?}", result.diagnostics);
}

#[test]
fn minimal_preset_skips_style_rules() {
    let linter = Linter::builder().rules(minimal_rules()).build();
    let result = linter
        .run(&demo_unit(), &DeclaredTypeResolver::new())
        .expect("run should succeed");

    let codes: Vec<&str> = result.diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["TL001", "TL002"]);
}

#[test]
fn severities_split_between_correctness_and_style() {
    let linter = Linter::builder().rules(recommended_rules()).build();
    let result = linter
        .run(&demo_unit(), &DeclaredTypeResolver::new())
        .expect("run should succeed");

    assert_eq!(result.count_by_severity(), (2, 2, 0));
    assert!(result.has_errors());
    assert!(result.has_diagnostics_at(Severity::Warning));
}

#[test]
fn nameless_declaration_is_recovered_not_fatal() {
    // A front end bug: a variable declaration that binds no name. The
    // naming rules fail on it; the any-rule still reports.
    let text = "let : any;\n";
    let root = SyntaxNode::new(SyntaxKind::SourceFile, 0).with_child(
        SyntaxNode::new(SyntaxKind::VariableDeclaration, 4).with_declared_type("any"),
    );
    let unit = SourceUnit::new("broken.ts", text, root);

    let linter = Linter::builder().rules(recommended_rules()).build();
    let result = linter
        .run(&unit, &DeclaredTypeResolver::new())
        .expect("run must not abort");

    let codes: Vec<&str> = result.diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["TL002"]);
    // camel-case-naming and prefer-enum-over-string both failed on the
    // nameless node and were skipped.
    assert_eq!(result.recovered_errors, 2);
}
