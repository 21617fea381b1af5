use sprout_ast::items::Item;
use sprout_ast::node::{AstNode, NodeKind};
use sprout_ast::statements::Stmt;
use sprout_ast::symbol::{DataType, SymbolKind};
use sprout_ast::tree::count_nodes;
use sprout_parsing::{parse_source, ErrorCategory, ErrorKind};
use test_log::test;

#[test]
fn declare_and_print() {
    let unit = parse_source("begin int x = 5; print(x); end").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        unit.program.tree().to_string(),
        "\
Program
  Block
    DeclAssign \"x\"
      IntLiteral \"5\"
    Print
      ArgList
        Identifier \"x\"
"
    );
    let x = unit.global_symbol("x").expect("x should be declared");
    assert_eq!(x.kind, SymbolKind::Variable);
    assert_eq!(x.ty, DataType::Integer);
    assert_eq!(x.address, 0);
    assert_eq!(unit.scopes.len(), 1);
}

#[test]
fn redeclaration_in_same_scope() {
    let err = parse_source("begin\n  int x;\n  x = 5;\n  int x;\nend").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::Redeclaration {
            name: "x".to_string(),
            previous_line: 2
        }
    );
    assert_eq!(err.line(), 4);
    assert_eq!(err.category(), ErrorCategory::Semantic);
}

#[test]
fn assignment_to_undeclared() {
    let err = parse_source("begin y = 2; end").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UndeclaredAssignment("y".to_string()));
    assert!(err.to_string().contains("\"y\""));
}

#[test]
fn function_with_parameter() {
    let unit = parse_source("function int f(int a) begin return a; end begin int x = f(3); end")
        .unwrap_or_else(|e| panic!("{e}"));
    let f = unit.function("f").expect("f should be in the tree");
    let a = unit
        .scopes
        .lookup_local(f.scope, "a")
        .expect("a should be in the scope of f");
    assert_eq!(a.kind, SymbolKind::Parameter);
    assert_eq!(a.address, 1);

    let f_symbol = unit.global_symbol("f").expect("f should be global");
    assert_eq!(f_symbol.kind, SymbolKind::Function);
    assert_eq!(f_symbol.address, 0);
    let x = unit.global_symbol("x").expect("x should be global");
    assert_eq!(x.kind, SymbolKind::Variable);
    assert_eq!(x.address, 0);
    assert!(unit.scopes.lookup_local(unit.global, "a").is_none());
}

#[test]
fn only_functions_have_scopes() {
    let unit = parse_source(
        "function int f(int a) begin if a then begin int b; end endif return a; end \
         procedure p() begin end \
         begin while 1 do begin int c; end endwhile end",
    )
    .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(unit.scopes.len(), 3);
    // nested blocks declare into the function scope
    assert_eq!(unit.function_symbol("f", "b").map(|s| s.address), Some(2));
    assert_eq!(unit.global_symbol("c").map(|s| s.address), Some(0));
    for function in unit.program.functions() {
        assert_eq!(unit.scopes.parent(function.scope), Some(unit.global));
    }
}

#[test]
fn globals_stay_contiguous_around_functions() {
    let unit = parse_source(
        "function int f(int a, int b) begin int c; return c; end \
         begin int x; int y; end",
    )
    .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(unit.function_symbol("f", "c").map(|s| s.address), Some(3));
    assert_eq!(unit.global_symbol("x").map(|s| s.address), Some(0));
    assert_eq!(unit.global_symbol("y").map(|s| s.address), Some(1));
}

#[test]
fn parameter_shadows_earlier_global() {
    let unit = parse_source(
        "function int a() begin return 1; end function int g(int a) begin return a; end",
    )
    .unwrap_or_else(|e| panic!("{e}"));
    let a = unit.function_symbol("g", "a").expect("a should resolve inside g");
    assert_eq!(a.kind, SymbolKind::Parameter);
    assert_eq!(a.address, 1);
    assert_eq!(
        unit.global_symbol("a").map(|s| s.kind),
        Some(SymbolKind::Function)
    );
}

#[test]
fn nearest_scope_wins_for_calls() {
    let err = parse_source(
        "function int a() begin return 1; end function int g(int a) begin return a(); end",
    )
    .unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::NotCallable {
            name: "a".to_string(),
            found: Some(SymbolKind::Parameter)
        }
    );
}

#[test]
fn local_shadows_global_variable_type() {
    let unit = parse_source(
        "function int h() begin return 0; end \
         function int g(int x) begin float h; return x; end",
    )
    .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        unit.function_symbol("g", "h").map(|s| (s.kind, s.ty)),
        Some((SymbolKind::Variable, DataType::Float))
    );
    assert_eq!(
        unit.global_symbol("h").map(|s| (s.kind, s.ty)),
        Some((SymbolKind::Function, DataType::Integer))
    );
}

#[test]
fn parameter_named_like_its_function() {
    let unit = parse_source("function int f(int f) begin return f; end");
    assert!(unit.is_ok());
}

#[test]
fn recursion_and_forward_calls() {
    assert!(
        parse_source("function int f(int n) begin return f(n - 1); end").is_ok(),
        "a function should be able to call itself"
    );
    let err = parse_source(
        "function int f() begin return g(); end function int g() begin return 1; end",
    )
    .unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::NotCallable {
            name: "g".to_string(),
            found: None
        }
    );
}

#[test]
fn procedures_are_callable_statements() {
    let unit = parse_source("procedure show(float v) begin print(v); end begin show(1.5); end")
        .unwrap_or_else(|e| panic!("{e}"));
    let symbol = unit.global_symbol("show").expect("show should be global");
    assert_eq!(symbol.kind, SymbolKind::Procedure);
    assert_eq!(symbol.ty, DataType::Void);
    let Some(Item::Main(main)) = unit.program.items.last() else {
        panic!("expected a main block");
    };
    assert!(matches!(&main.statements[0], Stmt::Call(call) if call.name == "show"));
}

#[test]
fn calling_a_variable() {
    let err = parse_source("begin int x; x(); end").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::NotCallable {
            name: "x".to_string(),
            found: Some(SymbolKind::Variable)
        }
    );
}

#[test]
fn empty_program() {
    let unit = parse_source("").unwrap_or_else(|e| panic!("{e}"));
    assert!(unit.program.items.is_empty());
    assert_eq!(unit.program.kind(), NodeKind::Program);
    let unit = parse_source("  // nothing here\n").unwrap_or_else(|e| panic!("{e}"));
    assert!(unit.program.items.is_empty());
}

#[test]
fn functions_without_main() {
    let unit = parse_source("function int one() begin return 1; end").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(unit.program.items.len(), 1);
    assert!(unit.program.main().is_none());
}

#[test]
fn tokens_after_main_block() {
    let err = parse_source("begin end\nfunction int f() begin return 1; end").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TrailingTokens(found) if found.lexeme() == "function"));
    assert_eq!(err.line(), 2);
    let err = parse_source("begin end begin end").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TrailingTokens(_)));
}

#[test]
fn unknown_character() {
    let err = parse_source("begin int x = 1 ! 2; end").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownCharacter("!".to_string()));
    assert_eq!(err.category(), ErrorCategory::Lexical);
}

#[test]
fn missing_semicolon_names_found_token() {
    let err = parse_source("begin\nint x\nprint(x);\nend").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error on line 3: expected ';', found 'print' (PRINT)"
    );
}

#[test]
fn use_before_declaration() {
    let err = parse_source("begin print(x); int x; end").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UndeclaredVariable("x".to_string()));
}

#[test]
fn complete_program() {
    let source = "\
// computes a factorial
function int fact(int n)
begin
    if n <= 1 then
    begin
        return 1;
    end
    else
    begin
        return n * fact(n - 1);
    end
    endelse
    endif
end

begin
    int n;
    scan(n);
    float half = n / 2.0;
    while n > 0 do
    begin
        print(fact(n), half);
        n = n - 1;
    end
    endwhile
end
";
    let unit = parse_source(source).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(unit.program.items.len(), 2);
    assert_eq!(unit.global_symbol("half").map(|s| s.address), Some(1));
    assert_eq!(unit.global_symbol("fact").map(|s| s.line), Some(2));
    assert!(count_nodes(&unit.program) > 30);
}
