use crate::ast::{Expr, Literal};

/// Render an expression tree in fully parenthesized prefix form.
pub fn print(expr: &Expr) -> String {
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(&operator.lexeme, &[left.as_ref(), right.as_ref()]),
        Expr::Grouping(inner) => parenthesize("Grouping", &[inner.as_ref()]),
        Expr::Literal(literal) => literal_text(literal),
        Expr::Unary { operator, right } => parenthesize(&operator.lexeme, &[right.as_ref()]),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut rendered = String::from("(");
    rendered.push_str(name);
    for expr in exprs {
        rendered.push(' ');
        rendered.push_str(&print(expr));
    }
    rendered.push(')');
    rendered
}

fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Number(value) => value.to_string(),
        Literal::String(value) => value.clone(),
        Literal::Bool(value) => value.to_string(),
        Literal::Nil => "nil".to_string(),
    }
}
