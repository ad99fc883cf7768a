use loxide::{
    ast::{Expr, Literal},
    printer,
    token::{Token, TokenKind},
};

fn operator(kind: TokenKind, lexeme: &str) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        literal: None,
        line: 1,
    }
}

#[test]
fn prints_nested_expression_in_prefix_form() {
    let expr = Expr::Binary {
        left: Box::new(Expr::Unary {
            operator: operator(TokenKind::Minus, "-"),
            right: Box::new(Expr::Literal(Literal::Number(123.0))),
        }),
        operator: operator(TokenKind::Star, "*"),
        right: Box::new(Expr::Grouping(Box::new(Expr::Literal(Literal::Number(
            45.67,
        ))))),
    };
    assert_eq!(printer::print(&expr), "(* (- 123) (Grouping 45.67))");
}

#[test]
fn nil_literal_prints_nil() {
    assert_eq!(printer::print(&Expr::Literal(Literal::Nil)), "nil");
}

#[test]
fn bool_and_string_literals_print_their_values() {
    assert_eq!(printer::print(&Expr::Literal(Literal::Bool(true))), "true");
    assert_eq!(
        printer::print(&Expr::Literal(Literal::String("hi".to_string()))),
        "hi"
    );
}

#[test]
fn comparison_uses_operator_lexeme() {
    let expr = Expr::Binary {
        left: Box::new(Expr::Literal(Literal::Number(1.0))),
        operator: operator(TokenKind::LessEqual, "<="),
        right: Box::new(Expr::Literal(Literal::Number(2.0))),
    };
    assert_eq!(printer::print(&expr), "(<= 1 2)");
}
